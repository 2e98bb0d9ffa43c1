//! # Interaction Formulas
//!
//! Dimensionless interaction criteria from EN 1993-1-1 §6.2.1(7). The raw
//! value is returned; sign handling and the unity comparison live in
//! [`crate::checks::CheckResult`].

/// Yield criterion for a critical point of the cross-section (EQ 6.1)
///
/// # Formula
/// (σ_x/f_y/γ_M0)² + (σ_z/f_y/γ_M0)² − (σ_x/f_y/γ_M0)(σ_z/f_y/γ_M0) + 3(τ/f_y/γ_M0)²
///
/// # Example
/// ```rust
/// use codecheck_core::equations::interaction::stress_interaction;
///
/// let ur = stress_interaction(100.0, 50.0, 20.0, 355.0, 1.15);
/// assert!((ur - 0.0522).abs() < 1e-4);
/// ```
#[inline]
pub fn stress_interaction(sigma_x: f64, sigma_z: f64, tau: f64, fy: f64, gamma_m0: f64) -> f64 {
    let x = sigma_x / fy / gamma_m0;
    let z = sigma_z / fy / gamma_m0;
    let t = tau / fy / gamma_m0;
    x.powi(2) + z.powi(2) - x * z + 3.0 * t.powi(2)
}

/// Conservative linear summation of axial and biaxial bending ratios (EQ 6.2)
///
/// # Formula
/// N_Ed/N_Rd + M_y,Ed/M_y,Rd + M_z,Ed/M_z,Rd
#[inline]
pub fn linear_interaction(n_ed: f64, n_rd: f64, my_ed: f64, my_rd: f64, mz_ed: f64, mz_rd: f64) -> f64 {
    n_ed / n_rd + my_ed / my_rd + mz_ed / mz_rd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_interaction_known_value() {
        let x: f64 = 100.0 / 355.0 / 1.15;
        let z: f64 = 50.0 / 355.0 / 1.15;
        let t: f64 = 20.0 / 355.0 / 1.15;
        let expected = x * x + z * z - x * z + 3.0 * t * t;
        assert!((stress_interaction(100.0, 50.0, 20.0, 355.0, 1.15) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pure_shear_reaches_unity_at_shear_yield() {
        // τ = f_y/√3 with γ_M0 = 1 gives exactly 1.0
        let tau = 355.0 / 3.0_f64.sqrt();
        assert!((stress_interaction(0.0, 0.0, tau, 355.0, 1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_interaction_sum() {
        assert!((linear_interaction(1.0, 1.0, 0.5, 1.0, 0.6, 1.0) - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_linear_interaction_can_be_negative() {
        assert!(linear_interaction(-0.5, 1.0, -0.2, 1.0, 0.1, 1.0) < 0.0);
    }
}
