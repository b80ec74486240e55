//! The lens plane scale factor recurrence.
//!
//! Multi-plane lensing derives one dimensionless factor per plane from the
//! transformed comoving distances `D_k = (1 + z_k) * D_A(z_k)` of three
//! consecutive planes:
//!
//! ```text
//! f_k = (D_k - D_{k-1}) / D_k * D_{k-2} / (D_{k-1} - D_{k-2})
//! ```
//!
//! The window starts from the placeholder values `(0, 1, 0)`, so the factors
//! produced while the first two redshifts fill the window are meaningless
//! and are dropped: `n` redshifts yield `n - 2` factors.

use crate::cosmo::DistanceProvider;
use crate::error::AppError;

/// Rolling window of the last three transformed distances.
#[derive(Debug, Clone, Copy)]
pub struct DistanceWindow {
    prev2: f64,
    prev1: f64,
    curr: f64,
}

impl DistanceWindow {
    pub fn new() -> Self {
        Self {
            prev2: 0.0,
            prev1: 1.0,
            curr: 0.0,
        }
    }

    /// Shift the window onto `dist` and return the factor for the new slot.
    ///
    /// Plain IEEE-754 division: a degenerate window (equal consecutive
    /// distances, or a zero current distance) yields `inf`/`NaN` rather
    /// than an error.
    pub fn advance(&mut self, dist: f64) -> f64 {
        self.prev2 = self.prev1;
        self.prev1 = self.curr;
        self.curr = dist;
        (self.curr - self.prev1) / self.curr * self.prev2 / (self.prev1 - self.prev2)
    }
}

impl Default for DistanceWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the scale factor sequence for an ordered redshift list.
///
/// Returns `n - 2` factors for `n` redshifts (empty when `n < 3`). The
/// redshifts are consumed in order; provider errors abort immediately.
pub fn scale_factors<P: DistanceProvider>(
    provider: &P,
    redshifts: &[f64],
) -> Result<Vec<f64>, AppError> {
    let mut window = DistanceWindow::new();
    let mut factors = Vec::with_capacity(redshifts.len().saturating_sub(2));

    for (idx, &z) in redshifts.iter().enumerate() {
        let dist = (1.0 + z) * provider.angular_diameter_distance(z)?;
        let factor = window.advance(dist);
        // Factors for the first two redshifts mix placeholder window values.
        if idx >= 2 {
            factors.push(factor);
        }
    }

    Ok(factors)
}
