//! # Code Checks
//!
//! One pure function per EN 1993-1-1 clause. Every check follows the same
//! contract:
//!
//! - Input: a borrowed [`MemberState`] (never mutated)
//! - Output: a [`CheckResult`] holding the utilization ratio and verdict
//! - No I/O, no shared state, deterministic
//!
//! Checks are independent of each other; the order they run in only decides
//! the row ids of the report.
//!
//! ## Available Checks
//!
//! - [`interaction`] - EQ (6.1) stress interaction, EQ (6.2) axial + biaxial bending
//! - [`axial`] - EQ (6.5) tension, EQ (6.9) compression
//! - [`bending`] - EQ (6.12) bending resistance
//! - [`shear`] - EQ (6.17) shear resistance
//! - [`torsion`] - EQ (6.19) torsion resistance

pub mod axial;
pub mod bending;
pub mod interaction;
pub mod shear;
pub mod torsion;

use serde::{Deserialize, Serialize};

use crate::member::MemberState;

pub use axial::{compression_resistance, tension_resistance};
pub use bending::bending_resistance;
pub use interaction::{axial_bending_interaction, stress_interaction};
pub use shear::shear_resistance;
pub use torsion::torsion_resistance;

/// Signature every registered check conforms to.
pub type CheckFn = fn(&MemberState) -> CheckResult;

/// Outcome of a single check.
///
/// ## JSON Example
///
/// ```json
/// { "is_satisfied": true, "utilization_ratio": 0.52 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// `true` iff `utilization_ratio < 1.0`
    pub is_satisfied: bool,

    /// Magnitude of the demand/capacity ratio (always non-negative, may be inf or NaN)
    pub utilization_ratio: f64,
}

impl CheckResult {
    /// Build a result from a raw, possibly signed, ratio.
    ///
    /// Every check goes through here so the verdict and the reported ratio can
    /// never disagree.
    ///
    /// ```rust
    /// use codecheck_core::checks::CheckResult;
    ///
    /// let result = CheckResult::from_ratio(-0.4);
    /// assert_eq!(result.utilization_ratio, 0.4);
    /// assert!(result.is_satisfied);
    ///
    /// assert!(!CheckResult::from_ratio(f64::NAN).is_satisfied);
    /// ```
    pub fn from_ratio(raw: f64) -> Self {
        let utilization_ratio = raw.abs();
        CheckResult {
            is_satisfied: utilization_ratio < 1.0,
            utilization_ratio,
        }
    }

    /// Check if the member passes this clause
    pub fn passes(&self) -> bool {
        self.is_satisfied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_is_a_failure() {
        assert!(!CheckResult::from_ratio(1.0).is_satisfied);
        assert!(!CheckResult::from_ratio(-1.0).is_satisfied);
        assert!(CheckResult::from_ratio(0.999_999).is_satisfied);
    }

    #[test]
    fn test_unbounded_ratio_fails() {
        let result = CheckResult::from_ratio(f64::NEG_INFINITY);
        assert_eq!(result.utilization_ratio, f64::INFINITY);
        assert!(!result.passes());
    }

    #[test]
    fn test_serialization() {
        let result = CheckResult::from_ratio(0.25);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"is_satisfied":true,"utilization_ratio":0.25}"#);
    }
}
