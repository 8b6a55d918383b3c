//! Integrands evaluated by the quadrature routines
//!
//! An integrand is a pure real-to-real function. Every worker thread evaluates
//! the same integrand concurrently, so implementations must be `Sync` and must
//! not touch shared mutable state.

use std::fmt::Debug;

/// Trait for functions that can be integrated
pub trait Integrand: Sync {
    /// Evaluate the function at `x`
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Sync,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `f(x) = sqrt(1 + e^x)`, the program's fixed integrand.
///
/// Finite for every `x` the command line accepts (`0 <= x <= 50`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqrtOnePlusExp;

impl Integrand for SqrtOnePlusExp {
    fn eval(&self, x: f64) -> f64 {
        (1.0 + x.exp()).sqrt()
    }
}

/// Human-readable description for logging
pub fn describe<I: Integrand + Debug>(integrand: &I) -> String {
    format!("{:?}", integrand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_one_plus_exp_values() {
        let f = SqrtOnePlusExp;
        assert_relative_eq!(f.eval(0.0), 2f64.sqrt());
        assert_relative_eq!(f.eval(1.0), (1.0 + std::f64::consts::E).sqrt());
        // e^50 dominates; f(50) is roughly e^25
        assert_relative_eq!(f.eval(50.0), 25f64.exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_closure_is_integrand() {
        let square = |x: f64| x * x;
        assert_eq!(square.eval(3.0), 9.0);

        let offset = 2.5;
        let shifted = move |x: f64| x + offset;
        assert_eq!(shifted.eval(1.0), 3.5);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let f = SqrtOnePlusExp;
        let first = f.eval(0.7315);
        for _ in 0..8 {
            assert_eq!(f.eval(0.7315).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_concurrent_evaluation() {
        let f = &SqrtOnePlusExp;
        let expected: Vec<f64> = (0..4).map(|i| f.eval(i as f64)).collect();

        let results: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| s.spawn(move || f.eval(i as f64)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, expected);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&SqrtOnePlusExp), "SqrtOnePlusExp");
    }
}
