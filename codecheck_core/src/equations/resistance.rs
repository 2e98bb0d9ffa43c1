//! # Cross-Section Resistance Formulas
//!
//! Design resistances of steel cross-sections per EN 1993-1-1 §6.2. Each
//! function is a direct transcription of one formula; selecting *which*
//! section property to pass in is the job of the check functions.
//!
//! ## Notation
//!
//! - `A` = Gross area, `A_net` = net area, `A_eff` = effective area
//! - `A_v` = Shear area
//! - `W` = Section modulus (plastic, elastic or effective)
//! - `f_y` = Yield strength, `f_u` = ultimate strength
//! - `γ_M0`, `γ_M2` = Partial factors
//!
//! ## References
//!
//! - EN 1993-1-1:2005 §6.2.3 – §6.2.6

/// Reduction factor applied to the ultimate strength of the net section (EQ 6.7)
pub const NET_SECTION_FACTOR: f64 = 0.9;

// =============================================================================
// AXIAL RESISTANCE
// =============================================================================

/// Design plastic resistance of the gross section (EQ 6.6)
///
/// # Formula
/// N_pl,Rd = A f_y / γ_M0
///
/// # Example
/// ```rust
/// use codecheck_core::equations::resistance::plastic_axial_resistance;
///
/// let n_pl = plastic_axial_resistance(1.0, 355.0, 1.15);
/// assert!((n_pl - 308.70).abs() < 0.01);
/// ```
#[inline]
pub fn plastic_axial_resistance(area: f64, fy: f64, gamma_m0: f64) -> f64 {
    area * fy / gamma_m0
}

/// Design ultimate resistance of the net section at fastener holes (EQ 6.7)
///
/// # Formula
/// N_u,Rd = 0.9 A_net f_u / γ_M2
#[inline]
pub fn net_section_ultimate_resistance(area_net: f64, fu: f64, gamma_m2: f64) -> f64 {
    NET_SECTION_FACTOR * area_net * fu / gamma_m2
}

/// Design tension resistance when the net section governs (EQ 6.6/6.7)
///
/// # Formula
/// N_t,Rd = min(N_pl,Rd, N_u,Rd)
///
/// # Example
/// ```rust
/// use codecheck_core::equations::resistance::net_tension_resistance;
///
/// // Net section governs: 0.9 × 0.5 × 490 / 1.25 = 176.4
/// let nt = net_tension_resistance(1.0, 0.5, 355.0, 490.0, 1.15, 1.25);
/// assert!((nt - 176.4).abs() < 0.01);
/// ```
#[inline]
pub fn net_tension_resistance(area: f64, area_net: f64, fy: f64, fu: f64, gamma_m0: f64, gamma_m2: f64) -> f64 {
    plastic_axial_resistance(area, fy, gamma_m0).min(net_section_ultimate_resistance(area_net, fu, gamma_m2))
}

// =============================================================================
// BENDING RESISTANCE
// =============================================================================

/// Design bending resistance for a given section modulus (EQ 6.13 – 6.15)
///
/// # Formula
/// M_c,Rd = W f_y / γ_M0
///
/// Pass W_pl for class 1/2, W_el,min for class 3 and W_eff,min for class 4.
#[inline]
pub fn bending_resistance(modulus: f64, fy: f64, gamma_m0: f64) -> f64 {
    modulus * fy / gamma_m0
}

// =============================================================================
// SHEAR RESISTANCE
// =============================================================================

/// Design plastic shear resistance (EQ 6.18)
///
/// # Formula
/// V_pl,Rd = A_v (f_y / √3) / γ_M0
///
/// # Example
/// ```rust
/// use codecheck_core::equations::resistance::plastic_shear_resistance;
///
/// let v = plastic_shear_resistance(1.0, 355.0, 1.15);
/// assert!((v - 178.23).abs() < 0.01);
/// ```
#[inline]
pub fn plastic_shear_resistance(area_shear: f64, fy: f64, gamma_m0: f64) -> f64 {
    area_shear * fy / 3.0_f64.sqrt() / gamma_m0
}
