//! # Shear Resistance Check
//!
//! EN 1993-1-1 §6.2.6, EQ (6.17): V_Ed / V_c,Rd with the plastic shear
//! resistance V_c,Rd = A_v f_y / √3 / γ_M0. Shear buckling of slender webs is
//! outside this check.

use crate::checks::CheckResult;
use crate::equations::resistance;
use crate::member::MemberState;

/// EQ (6.17): V_Ed / V_c,Rd.
///
/// Reads `v_ed`, `area_shear`, `fy`, `gamma_m0`.
pub fn shear_resistance(member: &MemberState) -> CheckResult {
    let v_c_rd = resistance::plastic_shear_resistance(member.area_shear, member.fy, member.gamma_m0);
    CheckResult::from_ratio(member.v_ed / v_c_rd)
}
