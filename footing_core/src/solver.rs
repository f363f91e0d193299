//! # Scalar Root Finding
//!
//! Every design equation in a footing run is a single nonlinear equation in one
//! unknown (side length, effective depth, compression block depth). They are
//! solved here with a safeguarded Newton–Raphson iteration:
//!
//! 1. Start from a seed inside a sign-change bracket `[lo, hi]`
//! 2. Take a Newton step `x - f(x)/f'(x)`
//! 3. If the step leaves the bracket (or the slope is useless), bisect instead
//! 4. Shrink the bracket with the sign of `f(x)` and repeat
//!
//! The bracket guarantees progress, so a run either converges or fails with
//! [`CalcError::SolverDivergence`] after `max_iterations`. It never loops unbounded.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::solver::{solve_bracketed, SolverSettings};
//!
//! // x² = 2 on [0, 2]
//! let root = solve_bracketed(
//!     "sqrt2",
//!     |x| x * x - 2.0,
//!     |x| 2.0 * x,
//!     (0.0, 2.0),
//!     1.0,
//!     &SolverSettings::default(),
//! )
//! .unwrap();
//! assert!((root.value - 2f64.sqrt()).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default residual tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration budget per solve
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default number of doublings allowed when searching for a bracket
pub const DEFAULT_MAX_BRACKET_EXPANSIONS: usize = 60;

/// Convergence controls shared by all solver stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Residual tolerance |f(x)|, in the units of the equation being solved
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum Newton/bisection iterations before giving up
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Maximum doublings when growing an upper bracket
    #[serde(default = "default_max_bracket_expansions")]
    pub max_bracket_expansions: usize,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_max_bracket_expansions() -> usize {
    DEFAULT_MAX_BRACKET_EXPANSIONS
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_bracket_expansions: DEFAULT_MAX_BRACKET_EXPANSIONS,
        }
    }
}

impl SolverSettings {
    /// Validate settings before any solve uses them.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CalcError::invalid_input(
                "solver.tolerance",
                self.tolerance.to_string(),
                "Tolerance must be a positive number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "solver.max_iterations",
                "0",
                "At least one iteration is required",
            ));
        }
        Ok(())
    }
}

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Abscissa where the residual vanishes
    pub value: f64,
    /// Iterations spent
    pub iterations: usize,
}

/// Solve `f(x) = 0` inside `bracket`, starting from `seed`.
///
/// `f` must change sign over the bracket. `df` is the analytic derivative; a
/// bad derivative only slows convergence to bisection speed, it cannot break it.
///
/// # Errors
///
/// - [`CalcError::SolverDivergence`] if the bracket has no sign change, `f`
///   returns a non-finite value, or the iteration budget is exhausted.
pub fn solve_bracketed<F, D>(
    stage: &str,
    f: F,
    df: D,
    bracket: (f64, f64),
    seed: f64,
    settings: &SolverSettings,
) -> CalcResult<Root>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (lo, hi) = bracket;
    let f_lo = f(lo);
    let f_hi = f(hi);

    if !(f_lo.is_finite() && f_hi.is_finite()) {
        tracing::warn!(stage, lo, hi, "non-finite residual at bracket ends");
        return Err(CalcError::solver_divergence(stage, 0));
    }
    if f_lo.abs() <= settings.tolerance {
        return Ok(Root { value: lo, iterations: 0 });
    }
    if f_hi.abs() <= settings.tolerance {
        return Ok(Root { value: hi, iterations: 0 });
    }
    if f_lo.signum() == f_hi.signum() {
        tracing::warn!(stage, lo, hi, f_lo, f_hi, "bracket has no sign change");
        return Err(CalcError::solver_divergence(stage, 0));
    }

    // Orient so that f(neg) < 0 < f(pos)
    let (mut neg, mut pos) = if f_lo < 0.0 { (lo, hi) } else { (hi, lo) };

    let mut x = if seed > lo.min(hi) && seed < lo.max(hi) {
        seed
    } else {
        0.5 * (lo + hi)
    };

    for iteration in 1..=settings.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            tracing::warn!(stage, x, "non-finite residual");
            return Err(CalcError::solver_divergence(stage, iteration));
        }
        if fx.abs() <= settings.tolerance {
            tracing::trace!(stage, x, iteration, "converged on residual");
            return Ok(Root { value: x, iterations: iteration });
        }

        if fx < 0.0 {
            neg = x;
        } else {
            pos = x;
        }

        let (a, b) = (neg.min(pos), neg.max(pos));
        let slope = df(x);
        let newton = x - fx / slope;
        let next = if slope != 0.0 && newton.is_finite() && newton > a && newton < b {
            newton
        } else {
            0.5 * (a + b)
        };

        if (b - a) <= settings.tolerance * x.abs().max(1.0) || next == x {
            tracing::trace!(stage, x = next, iteration, "converged on bracket width");
            return Ok(Root { value: next, iterations: iteration });
        }
        x = next;
    }

    tracing::warn!(stage, iterations = settings.max_iterations, "solver budget exhausted");
    Err(CalcError::solver_divergence(stage, settings.max_iterations))
}

/// Grow an upper bound by doubling from `start` until `f` has the opposite
/// sign to `f(lo)`.
///
/// Returns `None` when the expansion budget runs out, which callers report as
/// a domain error (no root within a reasonable search bound).
pub fn expand_upper_bracket<F>(f: F, lo: f64, start: f64, settings: &SolverSettings) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    let sign_lo = f(lo).signum();
    let mut hi = start.max(lo);
    for _ in 0..=settings.max_bracket_expansions {
        let f_hi = f(hi);
        if !f_hi.is_finite() {
            return None;
        }
        if f_hi.signum() != sign_lo || f_hi == 0.0 {
            return Some(hi);
        }
        hi *= 2.0;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_root() {
        // x³ - x - 2 = 0 has a single real root near 1.5214
        let root = solve_bracketed(
            "cubic",
            |x| x.powi(3) - x - 2.0,
            |x| 3.0 * x * x - 1.0,
            (1.0, 2.0),
            1.5,
            &SolverSettings::default(),
        )
        .unwrap();
        assert!((root.value - 1.521_379_706_8).abs() < 1e-7);
    }

    #[test]
    fn test_zero_derivative_falls_back_to_bisection() {
        let root = solve_bracketed(
            "flat-slope",
            |x| x - 3.0,
            |_| 0.0,
            (0.0, 10.0),
            5.0,
            &SolverSettings::default(),
        )
        .unwrap();
        assert!((root.value - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_sign_change_is_divergence() {
        let err = solve_bracketed(
            "no-root",
            |x| x * x + 1.0,
            |x| 2.0 * x,
            (-1.0, 1.0),
            0.5,
            &SolverSettings::default(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "SOLVER_DIVERGENCE");
    }

    #[test]
    fn test_budget_exhaustion_is_divergence() {
        let settings = SolverSettings {
            tolerance: 1e-15,
            max_iterations: 2,
            ..SolverSettings::default()
        };
        // Derivative deliberately wrong so every step bisects
        let err = solve_bracketed("slow", |x| x - 0.123_456, |_| 0.0, (0.0, 1000.0), 1.0, &settings)
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::SolverDivergence {
                stage: "slow".to_string(),
                iterations: 2
            }
        );
    }

    #[test]
    fn test_expand_upper_bracket() {
        // Decreasing function, sign change at x = 700
        let hi = expand_upper_bracket(|x| 700.0 - x, 1.0, 100.0, &SolverSettings::default()).unwrap();
        assert_eq!(hi, 800.0);
    }

    #[test]
    fn test_expand_upper_bracket_gives_up() {
        let settings = SolverSettings {
            max_bracket_expansions: 3,
            ..SolverSettings::default()
        };
        assert!(expand_upper_bracket(|_| 1.0, 1.0, 10.0, &settings).is_none());
    }

    #[test]
    fn test_settings_validation() {
        let bad = SolverSettings {
            tolerance: 0.0,
            ..SolverSettings::default()
        };
        assert!(bad.validate().is_err());
        assert!(SolverSettings::default().validate().is_ok());
    }
}
