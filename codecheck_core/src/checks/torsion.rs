//! # Torsion Resistance Check
//!
//! EN 1993-1-1 §6.2.7, EQ (6.19): T_Ed / T_Rd. The torsional resistance is
//! supplied by the caller; it is not derived here.

use crate::checks::CheckResult;
use crate::member::MemberState;

/// EQ (6.19): T_Ed / T_Rd.
///
/// Reads `t_ed`, `t_rd`.
pub fn torsion_resistance(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(member.t_ed / member.t_rd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::test_member;

    #[test]
    fn test_torsion_ratio() {
        let member = MemberState {
            t_ed: 3.0,
            t_rd: 4.0,
            ..test_member()
        };
        let result = torsion_resistance(&member);
        assert!((result.utilization_ratio - 0.75).abs() < 1e-12);
        assert!(result.is_satisfied);
    }

    #[test]
    fn test_zero_torsion_resistance_fails() {
        let member = MemberState {
            t_ed: 0.1,
            t_rd: 0.0,
            ..test_member()
        };
        assert!(!torsion_resistance(&member).is_satisfied);
    }

    #[test]
    fn test_zero_over_zero_fails() {
        let member = MemberState {
            t_ed: 0.0,
            t_rd: 0.0,
            ..test_member()
        };
        let result = torsion_resistance(&member);
        assert!(result.utilization_ratio.is_nan());
        assert!(!result.is_satisfied);
    }
}
