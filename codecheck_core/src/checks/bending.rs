//! # Bending Resistance Check
//!
//! EN 1993-1-1 §6.2.5, EQ (6.12): M_Ed / M_c,Rd.
//!
//! The section modulus follows the three-way class branch:
//!
//! - Class 4: W_eff,min (EQ 6.15)
//! - Class 3: W_el,min (EQ 6.14)
//! - Otherwise: W_pl (EQ 6.13)
//!
//! This clause is catalogued but left out of the default registry; add it
//! with [`crate::runner::CheckRegistry::with_clause`].

use tracing::warn;

use crate::checks::CheckResult;
use crate::equations::resistance;
use crate::member::{MemberState, SectionBasis};

/// Section modulus selected by the member's cross-section class
pub fn governing_modulus(member: &MemberState) -> f64 {
    match member.cs_class.basis() {
        SectionBasis::Effective => member.w_eff_min,
        SectionBasis::Elastic => member.w_el_min,
        SectionBasis::Gross => {
            if !member.cs_class.is_recognized() {
                warn!(cs_class = member.cs_class.number(), "unrecognized cross-section class, using W_pl");
            }
            member.w_pl
        }
    }
}

/// Design bending resistance M_c,Rd
pub fn bending_capacity(member: &MemberState) -> f64 {
    resistance::bending_resistance(governing_modulus(member), member.fy, member.gamma_m0)
}

/// EQ (6.12): M_Ed / M_c,Rd.
///
/// Reads `m_ed`, `w_pl`, `w_el_min`, `w_eff_min`, `fy`, `gamma_m0`, `cs_class`.
pub fn bending_resistance(member: &MemberState) -> CheckResult {
    CheckResult::from_ratio(member.m_ed / bending_capacity(member))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::{test_member, CrossSectionClass};

    fn member_with_class(cs_class: CrossSectionClass) -> MemberState {
        MemberState {
            m_ed: 250.0,
            w_pl: 1.0,
            w_el_min: 0.8,
            w_eff_min: 0.6,
            fy: 355.0,
            gamma_m0: 1.0,
            cs_class,
            ..test_member()
        }
    }

    #[test]
    fn test_three_way_modulus_selection() {
        assert_eq!(governing_modulus(&member_with_class(CrossSectionClass::Class1)), 1.0);
        assert_eq!(governing_modulus(&member_with_class(CrossSectionClass::Class2)), 1.0);
        assert_eq!(governing_modulus(&member_with_class(CrossSectionClass::Class3)), 0.8);
        assert_eq!(governing_modulus(&member_with_class(CrossSectionClass::Class4)), 0.6);
    }

    #[test]
    fn test_unrecognized_class_uses_plastic_modulus() {
        assert_eq!(governing_modulus(&member_with_class(CrossSectionClass::Unrecognized(0))), 1.0);
    }

    #[test]
    fn test_bending_ratio_by_class() {
        // M_c,Rd = 355, 284, 213
        let plastic = bending_resistance(&member_with_class(CrossSectionClass::Class1));
        let elastic = bending_resistance(&member_with_class(CrossSectionClass::Class3));
        let effective = bending_resistance(&member_with_class(CrossSectionClass::Class4));

        assert!((plastic.utilization_ratio - 250.0 / 355.0).abs() < 1e-12);
        assert!((elastic.utilization_ratio - 250.0 / 284.0).abs() < 1e-12);
        assert!((effective.utilization_ratio - 250.0 / 213.0).abs() < 1e-12);

        assert!(plastic.is_satisfied);
        assert!(elastic.is_satisfied);
        assert!(!effective.is_satisfied);
    }
}
