//! Composite Simpson quadrature.
//!
//! The cosmology module integrates the inverse dimensionless Hubble rate
//! `1/E(z)`, which is smooth and slowly varying, so a fixed-step composite
//! Simpson rule converges far past the precision we report. Error scales as
//! `(b - a) h^4`, fourth order in the step size.

/// Integrate `f` over `[a, b]` with `steps` subintervals of Simpson's rule.
///
/// `steps` is rounded up to the next even count; Simpson pairs subintervals.
pub fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64, steps: usize) -> f64 {
    let n = if steps % 2 == 0 { steps.max(2) } else { steps + 1 };
    let h = (b - a) / n as f64;

    let mut acc = f(a) + f(b);
    for i in 1..n {
        let w = if i % 2 == 0 { 2.0 } else { 4.0 };
        acc += w * f(a + i as f64 * h);
    }
    acc * h / 3.0
}
