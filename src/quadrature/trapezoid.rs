//! Sequential composite trapezoidal rule

use crate::integrand::Integrand;

/// Estimate the integral of `f` over `[start, end]` with `segments` trapezoids.
///
/// Computes `h * (0.5 * (f(start) + f(end)) + sum_{i=1}^{segments-1} f(start + i*h))`
/// with `h = (end - start) / segments`, accumulating interior points in
/// ascending order. Zero segments is an empty sum and yields `0.0`.
pub fn partial_integral<I: Integrand + ?Sized>(
    f: &I,
    start: f64,
    end: f64,
    segments: usize,
) -> f64 {
    if segments == 0 {
        return 0.0;
    }

    let h = (end - start) / segments as f64;
    let mut sum = 0.5 * (f.eval(start) + f.eval(end));

    for i in 1..segments {
        sum += f.eval(start + i as f64 * h);
    }

    h * sum
}
