//! # EN 1993-1-1 Equations
//!
//! Fundamental resistance and interaction formulas used by the code checks.
//! Keeping them apart from the checks makes each formula easy to verify
//! against the printed code.
//!
//! ## Modules
//!
//! - [`resistance`] - Axial, bending and shear resistances (§6.2.3 – §6.2.6)
//! - [`interaction`] - Stress and force interaction criteria (§6.2.1)
//!
//! ## Sign Conventions
//!
//! - **Axial force**: Positive in tension for EQ 6.5, positive in compression for EQ 6.9
//! - **Stresses**: Signed; the interaction formulas accept either sign
//!
//! ## References
//!
//! - EN 1993-1-1:2005 Eurocode 3: Design of steel structures, Part 1-1

pub mod interaction;
pub mod resistance;

pub use interaction::{linear_interaction, stress_interaction};
pub use resistance::{
    bending_resistance,
    net_section_ultimate_resistance,
    net_tension_resistance,
    plastic_axial_resistance,
    plastic_shear_resistance,
    NET_SECTION_FACTOR,
};
