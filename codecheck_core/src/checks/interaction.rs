//! # Interaction Checks
//!
//! EN 1993-1-1 §6.2.1(7): the elastic yield criterion at a critical point
//! (EQ 6.1) and the conservative linear summation of axial force and biaxial
//! bending (EQ 6.2).

use crate::checks::CheckResult;
use crate::equations::interaction;
use crate::member::MemberState;

/// EQ (6.1): von Mises type interaction of local design stresses.
///
/// Reads `sigma_x_ed`, `sigma_z_ed`, `tau_ed`, `fy`, `gamma_m0`.
pub fn stress_interaction(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(interaction::stress_interaction(
        member.sigma_x_ed,
        member.sigma_z_ed,
        member.tau_ed,
        member.fy,
        member.gamma_m0,
    ))
}

/// EQ (6.2): N_Ed/N_Rd + M_y,Ed/M_y,Rd + M_z,Ed/M_z,Rd.
///
/// Reads `n_ed`, `n_rd`, `my_ed`, `my_rd`, `mz_ed`, `mz_rd`.
pub fn axial_bending_interaction(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(interaction::linear_interaction(
        member.n_ed,
        member.n_rd,
        member.my_ed,
        member.my_rd,
        member.mz_ed,
        member.mz_rd,
    ))
}
