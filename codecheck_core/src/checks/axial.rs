//! # Axial Resistance Checks
//!
//! EN 1993-1-1 §6.2.3 (tension, EQ 6.5) and §6.2.4 (compression, EQ 6.9).
//!
//! ## Capacity Sources
//!
//! - **Tension**: the supplied `nt_rd` is used as-is unless the net area is
//!   smaller than the gross area. In that case it is replaced by
//!   `min(N_pl,Rd, N_u,Rd)` computed from the section.
//! - **Compression**: `N_c,Rd` is always computed from the section. Class 4
//!   members use `A_eff`; every other class (including unrecognized values)
//!   uses `A`.

use tracing::{debug, warn};

use crate::checks::CheckResult;
use crate::equations::resistance;
use crate::member::{MemberState, SectionBasis};

/// Tension resistance N_t,Rd that EQ (6.5) divides by.
pub fn tension_capacity(member: &MemberState) -> f64 {
    if member.area_net < member.area {
        let computed = resistance::net_tension_resistance(
            member.area,
            member.area_net,
            member.fy,
            member.fu,
            member.gamma_m0,
            member.gamma_m2,
        );
        debug!(
            supplied = member.nt_rd,
            computed,
            area = member.area,
            area_net = member.area_net,
            "net section governs, N_t,Rd recomputed"
        );
        computed
    } else {
        member.nt_rd
    }
}

/// Compression resistance N_c,Rd that EQ (6.9) divides by.
pub fn compression_capacity(member: &MemberState) -> f64 {
    if !member.cs_class.is_recognized() {
        warn!(cs_class = member.cs_class.number(), "unrecognized cross-section class, using gross area");
    }
    let area = match member.cs_class.basis() {
        SectionBasis::Effective => member.area_eff,
        SectionBasis::Gross | SectionBasis::Elastic => member.area,
    };
    resistance::plastic_axial_resistance(area, member.fy, member.gamma_m0)
}

/// EQ (6.5): N_Ed / N_t,Rd.
///
/// Reads `n_ed`, `nt_rd`, `area`, `area_net`, `fy`, `fu`, `gamma_m0`, `gamma_m2`.
pub fn tension_resistance(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(member.n_ed / tension_capacity(member))
}

/// EQ (6.9): N_Ed / N_c,Rd.
///
/// Reads `n_ed`, `area`, `area_eff`, `fy`, `gamma_m0`, `cs_class`.
pub fn compression_resistance(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(member.n_ed / compression_capacity(member))
}
