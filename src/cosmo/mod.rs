//! Flat ΛCDM background cosmology and distance measures.
//!
//! The recurrence needs a single operation: the angular diameter distance
//! `D_A(z)` under a fixed flat cosmology. The standard relations are:
//!
//! - `E(z)   = sqrt(Om0 (1+z)^3 + (1 - Om0))` (no radiation term)
//! - `D_C(z) = (c / H0) * ∫_0^z dz' / E(z')`
//! - `D_A(z) = D_C(z) / (1 + z)` in a flat universe
//!
//! The integral has no closed form and is evaluated with composite Simpson
//! quadrature; the step count scales with `z` so accuracy stays well beyond
//! the four digits we report over any realistic redshift range.

use crate::error::AppError;
use crate::math::simpson;

/// Speed of light in km/s.
pub const C_KMS: f64 = 299_792.458;

/// Hubble constant (km/s/Mpc) of the fixed lensing cosmology.
pub const H0: f64 = 70.0;

/// Matter density parameter of the fixed lensing cosmology.
pub const OM0: f64 = 0.3;

/// Simpson subintervals per unit redshift.
const STEPS_PER_UNIT_Z: f64 = 256.0;

/// Floor on the subinterval count, so short intervals stay well resolved.
const MIN_STEPS: usize = 64;

/// Cap on the subinterval count, so an extreme redshift cannot stall the run.
const MAX_STEPS: usize = 200_000;

/// The one operation the recurrence consumes.
///
/// Kept behind a trait so tests can stub the distance-redshift relation
/// without re-deriving the physics.
pub trait DistanceProvider {
    /// Angular diameter distance in Mpc for redshift `z`.
    fn angular_diameter_distance(&self, z: f64) -> Result<f64, AppError>;
}

/// A flat ΛCDM cosmology, parameterized by `H0` and `Om0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLambdaCdm {
    h0: f64,
    om0: f64,
}

impl FlatLambdaCdm {
    pub fn new(h0: f64, om0: f64) -> Self {
        Self { h0, om0 }
    }

    /// The fixed cosmology used for lens plane factors (H0 = 70, Om0 = 0.3).
    pub fn standard() -> Self {
        Self::new(H0, OM0)
    }

    /// Hubble distance `c / H0` in Mpc.
    pub fn hubble_distance(&self) -> f64 {
        C_KMS / self.h0
    }

    /// Dimensionless Hubble rate `E(z) = H(z) / H0`.
    pub fn efunc(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        (self.om0 * zp1 * zp1 * zp1 + (1.0 - self.om0)).sqrt()
    }

    /// Line-of-sight comoving distance in Mpc.
    ///
    /// Rejects negative and non-finite redshifts; the integrand is only
    /// meaningful forward in redshift.
    pub fn comoving_distance(&self, z: f64) -> Result<f64, AppError> {
        if !z.is_finite() {
            return Err(AppError::input(format!("Redshift must be finite, got {z}.")));
        }
        if z < 0.0 {
            return Err(AppError::input(format!(
                "Redshift must be non-negative, got {z}."
            )));
        }
        if z == 0.0 {
            return Ok(0.0);
        }

        let steps = ((z * STEPS_PER_UNIT_Z).ceil() as usize).clamp(MIN_STEPS, MAX_STEPS);
        let integral = simpson(|x| 1.0 / self.efunc(x), 0.0, z, steps);
        if !integral.is_finite() {
            return Err(AppError::compute(format!(
                "Comoving distance integral diverged at z = {z}."
            )));
        }
        Ok(self.hubble_distance() * integral)
    }

    /// Angular diameter distance in Mpc.
    ///
    /// In a flat universe the transverse comoving distance equals the
    /// line-of-sight comoving distance, so `D_A = D_C / (1 + z)`.
    pub fn angular_diameter_distance(&self, z: f64) -> Result<f64, AppError> {
        Ok(self.comoving_distance(z)? / (1.0 + z))
    }
}

impl DistanceProvider for FlatLambdaCdm {
    fn angular_diameter_distance(&self, z: f64) -> Result<f64, AppError> {
        FlatLambdaCdm::angular_diameter_distance(self, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efunc_is_one_at_zero_redshift() {
        let cosmo = FlatLambdaCdm::standard();
        assert!((cosmo.efunc(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn comoving_distance_matches_reference_values() {
        // Reference values from an independent high-resolution evaluation of
        // the same integral (H0 = 70, Om0 = 0.3).
        let cosmo = FlatLambdaCdm::standard();
        let cases = [
            (0.1, 418.454),
            (0.5, 1888.625),
            (1.0, 3303.829),
            (2.0, 5179.862),
        ];
        for (z, expected) in cases {
            let d = cosmo.comoving_distance(z).unwrap();
            assert!(
                (d - expected).abs() / expected < 1e-4,
                "z = {z}: got {d}, expected ~{expected}"
            );
        }
    }

    #[test]
    fn distances_vanish_at_zero_redshift() {
        let cosmo = FlatLambdaCdm::standard();
        assert_eq!(cosmo.comoving_distance(0.0).unwrap(), 0.0);
        assert_eq!(cosmo.angular_diameter_distance(0.0).unwrap(), 0.0);
    }

    #[test]
    fn comoving_distance_is_monotone_in_redshift() {
        let cosmo = FlatLambdaCdm::standard();
        let mut prev = 0.0;
        for i in 1..=40 {
            let z = 0.1 * i as f64;
            let d = cosmo.comoving_distance(z).unwrap();
            assert!(d >= prev, "distance decreased at z = {z}");
            prev = d;
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_redshift() {
        let cosmo = FlatLambdaCdm::standard();
        assert!(cosmo.angular_diameter_distance(-0.1).is_err());
        assert!(cosmo.angular_diameter_distance(f64::NAN).is_err());
        assert!(cosmo.angular_diameter_distance(f64::INFINITY).is_err());
    }
}
