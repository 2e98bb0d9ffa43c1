//! # Clause Catalog
//!
//! Central catalog of every built-in code check. Each clause carries its
//! report label, the check function that evaluates it, and audit metadata
//! (formula, code reference, variables, assumptions).
//!
//! ## Usage
//!
//! ```rust
//! use codecheck_core::clauses::Clause;
//!
//! let clause: Clause = "EQ (6.9)".parse().unwrap();
//! assert_eq!(clause, Clause::Eq6_9);
//!
//! let meta = clause.metadata();
//! println!("{}: {}", clause.label(), meta.formula_plain);
//! ```

use std::str::FromStr;

use serde::Serialize;

use crate::checks::{self, CheckFn};
use crate::errors::CalcError;

// ============================================================================
// Code References
// ============================================================================

/// Reference to the design code a clause comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// EN 1993-1-1 Eurocode 3: Design of steel structures - General rules
    EN1993_1_1 {
        year: u16,
        section: &'static str,
        equation: &'static str,
    },
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::EN1993_1_1 { year, section, equation } => {
                format!("EN 1993-1-1:{} §{}, Eq. ({})", year, section, equation)
            }
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::EN1993_1_1 { .. } => "EC3-1-1",
        }
    }
}

const fn ec3(section: &'static str, equation: &'static str) -> CodeReference {
    CodeReference::EN1993_1_1 {
        year: 2005,
        section,
        equation,
    }
}

// ============================================================================
// Clause Categories
// ============================================================================

/// Categories for grouping clauses in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClauseCategory {
    /// Stress and force interaction criteria
    Interaction,
    /// Tension and compression resistance
    Axial,
    /// Bending resistance
    Bending,
    /// Shear and torsion resistance
    ShearTorsion,
}

impl ClauseCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClauseCategory::Interaction => "Interaction",
            ClauseCategory::Axial => "Axial Resistance",
            ClauseCategory::Bending => "Bending Resistance",
            ClauseCategory::ShearTorsion => "Shear and Torsion Resistance",
        }
    }

    /// Sort order for documentation (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            ClauseCategory::Interaction => 1,
            ClauseCategory::Axial => 2,
            ClauseCategory::Bending => 3,
            ClauseCategory::ShearTorsion => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// A member state field read by a clause.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Code symbol (e.g., "N_Ed")
    pub symbol: &'static str,
    /// Name of the `MemberState` field it is read from
    pub field: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, field: &'static str, description: &'static str) -> Self {
        Self { symbol, field, description }
    }
}

// ============================================================================
// Clause Metadata
// ============================================================================

/// Audit metadata for one clause.
#[derive(Debug, Clone, Serialize)]
pub struct ClauseMetadata {
    /// Human-readable name (e.g., "Compression Resistance")
    pub name: &'static str,
    /// What the clause verifies
    pub description: &'static str,
    /// The utilization formula in plain text
    pub formula_plain: &'static str,
    /// Code reference
    pub reference: CodeReference,
    /// Member state fields the check reads
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: ClauseCategory,
    /// Function implementing the check
    pub source_function: &'static str,
}

// ============================================================================
// Clause Enum
// ============================================================================

/// All built-in EN 1993-1-1 checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Clause {
    /// Stress interaction at a critical point
    Eq6_1,
    /// Linear axial + biaxial bending interaction
    Eq6_2,
    /// Tension resistance
    Eq6_5,
    /// Compression resistance
    Eq6_9,
    /// Bending resistance (not in the default run)
    Eq6_12,
    /// Shear resistance
    Eq6_17,
    /// Torsion resistance
    Eq6_19,
}

/// Every catalogued clause, in code order
pub static ALL_CLAUSES: &[Clause] = &[
    Clause::Eq6_1,
    Clause::Eq6_2,
    Clause::Eq6_5,
    Clause::Eq6_9,
    Clause::Eq6_12,
    Clause::Eq6_17,
    Clause::Eq6_19,
];

/// Clauses of the default run, in evaluation order
pub static DEFAULT_CLAUSES: &[Clause] = &[
    Clause::Eq6_1,
    Clause::Eq6_2,
    Clause::Eq6_5,
    Clause::Eq6_9,
    Clause::Eq6_17,
    Clause::Eq6_19,
];

impl Clause {
    /// Equation number as printed in the code
    pub fn number(&self) -> &'static str {
        match self {
            Clause::Eq6_1 => "6.1",
            Clause::Eq6_2 => "6.2",
            Clause::Eq6_5 => "6.5",
            Clause::Eq6_9 => "6.9",
            Clause::Eq6_12 => "6.12",
            Clause::Eq6_17 => "6.17",
            Clause::Eq6_19 => "6.19",
        }
    }

    /// Label used in report rows, e.g. `EQ (6.9)`
    pub fn label(&self) -> String {
        format!("EQ ({})", self.number())
    }

    /// The check function evaluating this clause
    pub fn check_fn(&self) -> CheckFn {
        match self {
            Clause::Eq6_1 => checks::stress_interaction,
            Clause::Eq6_2 => checks::axial_bending_interaction,
            Clause::Eq6_5 => checks::tension_resistance,
            Clause::Eq6_9 => checks::compression_resistance,
            Clause::Eq6_12 => checks::bending_resistance,
            Clause::Eq6_17 => checks::shear_resistance,
            Clause::Eq6_19 => checks::torsion_resistance,
        }
    }

    /// Whether the clause is part of the default run
    pub fn is_default(&self) -> bool {
        DEFAULT_CLAUSES.contains(self)
    }

    /// Get the full metadata for this clause
    pub fn metadata(&self) -> ClauseMetadata {
        match self {
            Clause::Eq6_1 => ClauseMetadata {
                name: "Stress Interaction",
                description: "Yield criterion for combined local longitudinal, transverse and shear stress at a critical point",
                formula_plain: "(sx/fy/gM0)^2 + (sz/fy/gM0)^2 - (sx/fy/gM0)(sz/fy/gM0) + 3(tau/fy/gM0)^2 < 1",
                reference: ec3("6.2.1(5)", "6.1"),
                variables: vec![
                    Variable::new("σ_x,Ed", "sigma_x_ed", "Design local longitudinal stress"),
                    Variable::new("σ_z,Ed", "sigma_z_ed", "Design local transverse stress"),
                    Variable::new("τ_Ed", "tau_ed", "Design local shear stress"),
                    Variable::new("f_y", "fy", "Yield strength"),
                    Variable::new("γ_M0", "gamma_m0", "Partial factor for cross-sections"),
                ],
                assumptions: vec!["Elastic verification", "Stresses taken at the same critical point"],
                category: ClauseCategory::Interaction,
                source_function: "checks::stress_interaction",
            },

            Clause::Eq6_2 => ClauseMetadata {
                name: "Axial and Biaxial Bending Interaction",
                description: "Conservative linear summation of utilization ratios for axial force and bending about both axes",
                formula_plain: "NEd/NRd + MyEd/MyRd + MzEd/MzRd < 1",
                reference: ec3("6.2.1(7)", "6.2"),
                variables: vec![
                    Variable::new("N_Ed", "n_ed", "Design axial force"),
                    Variable::new("N_Rd", "n_rd", "Design axial resistance"),
                    Variable::new("M_y,Ed", "my_ed", "Design moment about y-axis"),
                    Variable::new("M_y,Rd", "my_rd", "Design moment resistance about y-axis"),
                    Variable::new("M_z,Ed", "mz_ed", "Design moment about z-axis"),
                    Variable::new("M_z,Rd", "mz_rd", "Design moment resistance about z-axis"),
                ],
                assumptions: vec!["Resistances supplied for the section class in use"],
                category: ClauseCategory::Interaction,
                source_function: "checks::axial_bending_interaction",
            },

            Clause::Eq6_5 => ClauseMetadata {
                name: "Tension Resistance",
                description: "Design tension force against the lesser of gross-section yield and net-section fracture",
                formula_plain: "NEd/NtRd < 1; NtRd = min(A fy/gM0, 0.9 Anet fu/gM2) if Anet < A, else supplied NtRd",
                reference: ec3("6.2.3", "6.5"),
                variables: vec![
                    Variable::new("N_Ed", "n_ed", "Design tension force"),
                    Variable::new("N_t,Rd", "nt_rd", "Supplied tension resistance (used when A_net >= A)"),
                    Variable::new("A", "area", "Gross area"),
                    Variable::new("A_net", "area_net", "Net area at fastener holes"),
                    Variable::new("f_y", "fy", "Yield strength"),
                    Variable::new("f_u", "fu", "Ultimate strength"),
                    Variable::new("γ_M0", "gamma_m0", "Partial factor for cross-sections"),
                    Variable::new("γ_M2", "gamma_m2", "Partial factor for fracture"),
                ],
                assumptions: vec![
                    "Supplied N_t,Rd is replaced when the net area is smaller than the gross area",
                    "Category C slip-resistant connections (EQ 6.8) not considered",
                ],
                category: ClauseCategory::Axial,
                source_function: "checks::tension_resistance",
            },

            Clause::Eq6_9 => ClauseMetadata {
                name: "Compression Resistance",
                description: "Design compression force against the cross-section compression resistance",
                formula_plain: "NEd/NcRd < 1; NcRd = A fy/gM0 (class 1-3), Aeff fy/gM0 (class 4)",
                reference: ec3("6.2.4", "6.9"),
                variables: vec![
                    Variable::new("N_Ed", "n_ed", "Design compression force"),
                    Variable::new("A", "area", "Gross area"),
                    Variable::new("A_eff", "area_eff", "Effective area"),
                    Variable::new("f_y", "fy", "Yield strength"),
                    Variable::new("γ_M0", "gamma_m0", "Partial factor for cross-sections"),
                    Variable::new("class", "cs_class", "Cross-section class"),
                ],
                assumptions: vec![
                    "N_c,Rd is always computed, never supplied",
                    "Unrecognized class values use the gross area",
                    "Member buckling is outside this check",
                ],
                category: ClauseCategory::Axial,
                source_function: "checks::compression_resistance",
            },

            Clause::Eq6_12 => ClauseMetadata {
                name: "Bending Resistance",
                description: "Design moment against the cross-section bending resistance for the section class",
                formula_plain: "MEd/McRd < 1; McRd = Wpl fy/gM0 (class 1-2), Welmin fy/gM0 (class 3), Weffmin fy/gM0 (class 4)",
                reference: ec3("6.2.5", "6.12"),
                variables: vec![
                    Variable::new("M_Ed", "m_ed", "Design bending moment"),
                    Variable::new("W_pl", "w_pl", "Plastic section modulus"),
                    Variable::new("W_el,min", "w_el_min", "Minimum elastic section modulus"),
                    Variable::new("W_eff,min", "w_eff_min", "Minimum effective section modulus"),
                    Variable::new("f_y", "fy", "Yield strength"),
                    Variable::new("γ_M0", "gamma_m0", "Partial factor for cross-sections"),
                    Variable::new("class", "cs_class", "Cross-section class"),
                ],
                assumptions: vec![
                    "Uniaxial bending",
                    "Fastener holes in the tension flange neglected",
                    "Unrecognized class values use W_pl",
                ],
                category: ClauseCategory::Bending,
                source_function: "checks::bending_resistance",
            },

            Clause::Eq6_17 => ClauseMetadata {
                name: "Shear Resistance",
                description: "Design shear force against the plastic shear resistance",
                formula_plain: "VEd/VcRd < 1; VcRd = Av fy/sqrt(3)/gM0",
                reference: ec3("6.2.6", "6.17"),
                variables: vec![
                    Variable::new("V_Ed", "v_ed", "Design shear force"),
                    Variable::new("A_v", "area_shear", "Shear area"),
                    Variable::new("f_y", "fy", "Yield strength"),
                    Variable::new("γ_M0", "gamma_m0", "Partial factor for cross-sections"),
                ],
                assumptions: vec!["No shear buckling (EN 1993-1-5 §5 not checked)"],
                category: ClauseCategory::ShearTorsion,
                source_function: "checks::shear_resistance",
            },

            Clause::Eq6_19 => ClauseMetadata {
                name: "Torsion Resistance",
                description: "Design torsional moment against the supplied torsional resistance",
                formula_plain: "TEd/TRd < 1",
                reference: ec3("6.2.7", "6.19"),
                variables: vec![
                    Variable::new("T_Ed", "t_ed", "Design torsional moment"),
                    Variable::new("T_Rd", "t_rd", "Design torsional resistance"),
                ],
                assumptions: vec!["T_Rd supplied by the caller"],
                category: ClauseCategory::ShearTorsion,
                source_function: "checks::torsion_resistance",
            },
        }
    }

    /// Get all clauses in a given category
    pub fn in_category(category: ClauseCategory) -> Vec<Clause> {
        ALL_CLAUSES
            .iter()
            .filter(|clause| clause.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, sorted for documentation
    pub fn all_categories() -> Vec<ClauseCategory> {
        use ClauseCategory::*;
        let mut cats = vec![ShearTorsion, Bending, Axial, Interaction];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EQ ({})", self.number())
    }
}

impl FromStr for Clause {
    type Err = CalcError;

    /// Accepts the report label (`EQ (6.9)`) or the bare number (`6.9`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase();
        let number = compact
            .strip_prefix("EQ")
            .unwrap_or(compact.as_str())
            .trim_start_matches('(')
            .trim_end_matches(')');

        ALL_CLAUSES
            .iter()
            .find(|clause| clause.number() == number)
            .copied()
            .ok_or_else(|| CalcError::unknown_clause(s))
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the clause reference document from the catalog.
///
/// ```rust
/// use codecheck_core::clauses::generate_clauses_markdown;
///
/// let markdown = generate_clauses_markdown();
/// assert!(markdown.contains("Codecheck Clause Reference"));
/// assert!(markdown.contains("EQ (6.17)"));
/// ```
pub fn generate_clauses_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# Codecheck Clause Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-clauses`

Every clause below is evaluated as a utilization ratio UR. A clause passes
when |UR| < 1.

---

"#,
    );

    let categories = Clause::all_categories();

    for category in &categories {
        let clauses = Clause::in_category(*category);
        if clauses.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for clause in clauses {
            let meta = clause.metadata();

            output.push_str(&format!("### {} - {}\n\n", clause.label(), meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("**Inputs:**\n\n");
            output.push_str("| Symbol | Field | Description |\n");
            output.push_str("|--------|-------|-------------|\n");
            for var in &meta.variables {
                output.push_str(&format!("| {} | `{}` | {} |\n", var.symbol, var.field, var.description));
            }
            output.push('\n');

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!("**Source:** `{}`\n\n", meta.source_function));
            if !clause.is_default() {
                output.push_str("**Default run:** no (register explicitly)\n\n");
            }

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Clauses:** {}\n- **Default Run:** {}\n",
        ALL_CLAUSES.len(),
        DEFAULT_CLAUSES.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
