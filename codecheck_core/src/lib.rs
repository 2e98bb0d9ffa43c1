//! # codecheck_core - Steel Member Code-Check Engine
//!
//! `codecheck_core` evaluates EN 1993-1-1 cross-section checks for one steel
//! member under combined loading. Each clause yields a utilization ratio and
//! a pass/fail verdict; a run collects them into an ordered report and names
//! the governing clause.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Check functions are pure; a run owns its report
//! - **Typed input**: [`MemberState`] declares every field, nothing defaults to zero
//! - **Pluggable**: The registry is an ordered list the caller can edit
//! - **JSON-First**: Inputs and reports implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use codecheck_core::{CheckRegistry, CrossSectionClass, MemberState};
//!
//! let member = MemberState {
//!     sigma_x_ed: 100.0, sigma_z_ed: 50.0, tau_ed: 20.0,
//!     n_ed: 0.4, v_ed: 0.9, m_ed: 0.3, my_ed: 0.2, mz_ed: 0.1, t_ed: 0.05,
//!     n_rd: 1.0, nt_rd: 1.0, my_rd: 1.0, mz_rd: 1.0, t_rd: 1.0,
//!     area: 1.0, area_net: 1.0, area_eff: 0.8, area_shear: 1.0,
//!     w_pl: 1.0, w_el_min: 0.9, w_eff_min: 0.7,
//!     fy: 355.0, fu: 490.0,
//!     gamma_m0: 1.15, gamma_m1: 1.15, gamma_m2: 1.25,
//!     cs_class: CrossSectionClass::Class2,
//! };
//!
//! let report = CheckRegistry::default().run(&member);
//! assert_eq!(report.len(), 6);
//!
//! let governing = report.governing().unwrap();
//! println!("{} governs at {:.3}", governing.clause, governing.utilization_ratio);
//! ```
//!
//! ## Modules
//!
//! - [`member`] - Member state input and cross-section classes
//! - [`checks`] - Check functions and the [`CheckResult`] contract
//! - [`equations`] - Resistance and interaction formulas
//! - [`clauses`] - Clause catalog with audit metadata
//! - [`runner`] - Check registry, single and batch runs
//! - [`report`] - Ordered report, governing query, table rendering
//! - [`settings`] - TOML run settings
//! - [`errors`] - Structured error types

pub mod checks;
pub mod clauses;
pub mod equations;
pub mod errors;
pub mod member;
pub mod report;
pub mod runner;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use checks::{CheckFn, CheckResult};
pub use clauses::Clause;
pub use errors::{CalcError, CalcResult};
pub use member::{CrossSectionClass, MemberState, SectionBasis};
pub use report::{CheckReport, CheckRow, ReportSort};
pub use runner::{CheckEntry, CheckRegistry};
pub use settings::{OutputFormat, RunSettings};
