//! # Member State
//!
//! The single input of a code-check run: design stresses, forces, resistances,
//! section properties and partial factors for one steel member, already
//! populated by upstream analysis.
//!
//! Every field is required. A Rust caller cannot forget one (the struct has no
//! `Default`), and a JSON caller gets [`CalcError::MissingField`] from
//! [`MemberState::from_json`] before any check runs.
//!
//! ## Cross-Section Class
//!
//! EN 1993-1-1 §5.5 classes decide which section property a resistance uses:
//!
//! | Class | Basis | Area | Modulus |
//! |-------|-------|------|---------|
//! | 1, 2 | Gross | A | W_pl |
//! | 3 | Elastic | A | W_el,min |
//! | 4 | Effective | A_eff | W_eff,min |
//!
//! Any other integer is kept as [`CrossSectionClass::Unrecognized`] and uses
//! the gross basis.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Cross-section classification per EN 1993-1-1 Table 5.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum CrossSectionClass {
    Class1,
    Class2,
    Class3,
    Class4,
    /// A value outside 1..=4, carried through unchanged
    Unrecognized(i64),
}

/// Which family of section properties a resistance formula reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionBasis {
    /// Gross (plastic) properties: A, W_pl
    Gross,
    /// Elastic properties: W_el,min
    Elastic,
    /// Effective properties of a slender section: A_eff, W_eff,min
    Effective,
}

impl CrossSectionClass {
    /// Select exactly one property basis for this class.
    pub fn basis(&self) -> SectionBasis {
        match self {
            CrossSectionClass::Class4 => SectionBasis::Effective,
            CrossSectionClass::Class3 => SectionBasis::Elastic,
            CrossSectionClass::Class1 | CrossSectionClass::Class2 | CrossSectionClass::Unrecognized(_) => {
                SectionBasis::Gross
            }
        }
    }

    /// Numeric class as written in the code (or the raw unrecognized value)
    pub fn number(&self) -> i64 {
        match self {
            CrossSectionClass::Class1 => 1,
            CrossSectionClass::Class2 => 2,
            CrossSectionClass::Class3 => 3,
            CrossSectionClass::Class4 => 4,
            CrossSectionClass::Unrecognized(n) => *n,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CrossSectionClass::Unrecognized(_))
    }
}

impl From<i64> for CrossSectionClass {
    fn from(value: i64) -> Self {
        match value {
            1 => CrossSectionClass::Class1,
            2 => CrossSectionClass::Class2,
            3 => CrossSectionClass::Class3,
            4 => CrossSectionClass::Class4,
            other => CrossSectionClass::Unrecognized(other),
        }
    }
}

impl From<CrossSectionClass> for i64 {
    fn from(class: CrossSectionClass) -> Self {
        class.number()
    }
}

impl std::fmt::Display for CrossSectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_recognized() {
            write!(f, "Class {}", self.number())
        } else {
            write!(f, "Class {} (unrecognized)", self.number())
        }
    }
}

/// Design state of one member, as consumed by every check function.
///
/// Units are the caller's choice but must be consistent (e.g. N, mm, MPa).
///
/// ## JSON Example
///
/// ```json
/// {
///   "sigma_x_ed": 100.0, "sigma_z_ed": 50.0, "tau_ed": 20.0,
///   "n_ed": 0.4, "v_ed": 0.9, "m_ed": 0.3, "my_ed": 0.2, "mz_ed": 0.1, "t_ed": 0.05,
///   "n_rd": 1.0, "nt_rd": 1.0, "my_rd": 1.0, "mz_rd": 1.0, "t_rd": 1.0,
///   "area": 1.0, "area_net": 1.0, "area_eff": 0.8, "area_shear": 0.5,
///   "w_pl": 1.0, "w_el_min": 0.9, "w_eff_min": 0.7,
///   "fy": 355.0, "fu": 490.0,
///   "gamma_m0": 1.15, "gamma_m1": 1.15, "gamma_m2": 1.15,
///   "cs_class": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberState {
    // === Design Stresses ===
    /// Design value of the local longitudinal stress σ_x,Ed
    pub sigma_x_ed: f64,
    /// Design value of the local transverse stress σ_z,Ed
    pub sigma_z_ed: f64,
    /// Design value of the local shear stress τ_Ed
    pub tau_ed: f64,

    // === Design Forces and Moments ===
    /// Design axial force N_Ed
    pub n_ed: f64,
    /// Design shear force V_Ed
    pub v_ed: f64,
    /// Design bending moment M_Ed (uniaxial resistance check)
    pub m_ed: f64,
    /// Design bending moment about the y-axis M_y,Ed
    pub my_ed: f64,
    /// Design bending moment about the z-axis M_z,Ed
    pub mz_ed: f64,
    /// Design torsional moment T_Ed
    pub t_ed: f64,

    // === Resistances ===
    /// Axial resistance N_Rd used by the linear interaction
    pub n_rd: f64,
    /// Tension resistance N_t,Rd, used as supplied only when A_net >= A
    pub nt_rd: f64,
    /// Bending resistance about the y-axis M_y,Rd
    pub my_rd: f64,
    /// Bending resistance about the z-axis M_z,Rd
    pub mz_rd: f64,
    /// Torsional resistance T_Rd
    pub t_rd: f64,

    // === Section Properties ===
    /// Gross cross-sectional area A
    pub area: f64,
    /// Net area at holes for fasteners A_net
    pub area_net: f64,
    /// Effective area of a class 4 section A_eff
    pub area_eff: f64,
    /// Shear area A_v
    pub area_shear: f64,
    /// Plastic section modulus W_pl
    pub w_pl: f64,
    /// Minimum elastic section modulus W_el,min
    pub w_el_min: f64,
    /// Minimum effective section modulus W_eff,min
    pub w_eff_min: f64,

    // === Material and Partial Factors ===
    /// Yield strength f_y
    pub fy: f64,
    /// Ultimate tensile strength f_u
    pub fu: f64,
    /// Partial factor for resistance of cross-sections γ_M0
    pub gamma_m0: f64,
    /// Partial factor for resistance of members to instability γ_M1
    pub gamma_m1: f64,
    /// Partial factor for resistance of cross-sections in tension to fracture γ_M2
    pub gamma_m2: f64,

    /// Cross-section classification
    pub cs_class: CrossSectionClass,
}

impl MemberState {
    /// Parse a single member state from JSON.
    ///
    /// An absent field is reported as [`CalcError::MissingField`].
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::from_json_error(&e))
    }

    /// Parse a batch: either one JSON object or an array of objects.
    pub fn batch_from_json(json: &str) -> CalcResult<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| CalcError::from_json_error(&e))?;
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(|e| CalcError::from_json_error(&e)))
                .collect(),
            other => {
                let member = serde_json::from_value(other).map_err(|e| CalcError::from_json_error(&e))?;
                Ok(vec![member])
            }
        }
    }

    /// Reject non-finite inputs.
    ///
    /// Zero resistances are accepted: they make the affected check fail with
    /// an unbounded ratio, which is the intended report.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }
        Ok(())
    }

    /// All scalar fields by their serialized name
    pub fn numeric_fields(&self) -> [(&'static str, f64); 26] {
        [
            ("sigma_x_ed", self.sigma_x_ed),
            ("sigma_z_ed", self.sigma_z_ed),
            ("tau_ed", self.tau_ed),
            ("n_ed", self.n_ed),
            ("v_ed", self.v_ed),
            ("m_ed", self.m_ed),
            ("my_ed", self.my_ed),
            ("mz_ed", self.mz_ed),
            ("t_ed", self.t_ed),
            ("n_rd", self.n_rd),
            ("nt_rd", self.nt_rd),
            ("my_rd", self.my_rd),
            ("mz_rd", self.mz_rd),
            ("t_rd", self.t_rd),
            ("area", self.area),
            ("area_net", self.area_net),
            ("area_eff", self.area_eff),
            ("area_shear", self.area_shear),
            ("w_pl", self.w_pl),
            ("w_el_min", self.w_el_min),
            ("w_eff_min", self.w_eff_min),
            ("fy", self.fy),
            ("fu", self.fu),
            ("gamma_m0", self.gamma_m0),
            ("gamma_m1", self.gamma_m1),
            ("gamma_m2", self.gamma_m2),
        ]
    }
}

/// Shared fixture for unit tests across modules.
#[cfg(test)]
pub(crate) fn test_member() -> MemberState {
    MemberState {
        sigma_x_ed: 100.0,
        sigma_z_ed: 50.0,
        tau_ed: 20.0,
        n_ed: 0.4,
        v_ed: 0.9,
        m_ed: 0.3,
        my_ed: 0.2,
        mz_ed: 0.1,
        t_ed: 0.05,
        n_rd: 1.0,
        nt_rd: 1.0,
        my_rd: 1.0,
        mz_rd: 1.0,
        t_rd: 1.0,
        area: 1.0,
        area_net: 1.0,
        area_eff: 0.8,
        area_shear: 1.0,
        w_pl: 1.0,
        w_el_min: 0.9,
        w_eff_min: 0.7,
        fy: 355.0,
        fu: 490.0,
        gamma_m0: 1.15,
        gamma_m1: 1.15,
        gamma_m2: 1.25,
        cs_class: CrossSectionClass::Class2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_basis_precedence() {
        assert_eq!(CrossSectionClass::Class1.basis(), SectionBasis::Gross);
        assert_eq!(CrossSectionClass::Class2.basis(), SectionBasis::Gross);
        assert_eq!(CrossSectionClass::Class3.basis(), SectionBasis::Elastic);
        assert_eq!(CrossSectionClass::Class4.basis(), SectionBasis::Effective);
    }

    #[test]
    fn test_unrecognized_class_falls_through_to_gross() {
        assert_eq!(CrossSectionClass::from(0), CrossSectionClass::Unrecognized(0));
        assert_eq!(CrossSectionClass::from(7).basis(), SectionBasis::Gross);
        assert_eq!(CrossSectionClass::from(-1).basis(), SectionBasis::Gross);
    }

    #[test]
    fn test_class_serializes_as_integer() {
        let json = serde_json::to_string(&CrossSectionClass::Class4).unwrap();
        assert_eq!(json, "4");

        let roundtrip: CrossSectionClass = serde_json::from_str("9").unwrap();
        assert_eq!(roundtrip, CrossSectionClass::Unrecognized(9));
        assert_eq!(serde_json::to_string(&roundtrip).unwrap(), "9");
    }

    #[test]
    fn test_member_json_roundtrip() {
        let member = test_member();
        let json = serde_json::to_string_pretty(&member).unwrap();
        assert!(json.contains("\"cs_class\": 2"));

        let parsed = MemberState::from_json(&json).unwrap();
        assert_eq!(parsed, member);
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let mut value = serde_json::to_value(test_member()).unwrap();
        value.as_object_mut().unwrap().remove("t_rd");
        let err = MemberState::from_json(&value.to_string()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("t_rd"));
    }

    #[test]
    fn test_batch_accepts_object_or_array() {
        let one = serde_json::to_string(&test_member()).unwrap();
        assert_eq!(MemberState::batch_from_json(&one).unwrap().len(), 1);

        let many = serde_json::to_string(&vec![test_member(), test_member(), test_member()]).unwrap();
        assert_eq!(MemberState::batch_from_json(&many).unwrap().len(), 3);
    }

    #[test]
    fn test_batch_missing_field_in_any_element_fails() {
        let mut second = serde_json::to_value(test_member()).unwrap();
        second.as_object_mut().unwrap().remove("fy");
        let batch = serde_json::Value::Array(vec![serde_json::to_value(test_member()).unwrap(), second]);
        let err = MemberState::batch_from_json(&batch.to_string()).unwrap_err();
        assert_eq!(err, CalcError::missing_field("fy"));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut member = test_member();
        assert!(member.validate().is_ok());

        member.fu = f64::NAN;
        match member.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "fu"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_zero_resistance() {
        let mut member = test_member();
        member.t_rd = 0.0;
        assert!(member.validate().is_ok());
    }
}
