//! Degree-based sine and cosine from truncated Maclaurin series, and a
//! Newton-refined arccosine that is guaranteed to terminate.

use std::f32::consts::PI;

use tracing::{debug, warn};

use crate::config::{ArccosConfig, DEG_TO_RAD, RAD_TO_DEG, SERIES_TERMS};
use crate::error::ScalarError;
use crate::power::{factorial_f32, power};
use crate::roots::absolute;

/// Outcome of a converged [`try_arccos`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArccosResult {
    /// The angle in radians, within `[0, π]`.
    pub angle: f32,
    /// Refinement steps taken.
    pub iterations: usize,
    /// Size of the final step.
    pub residual: f32,
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Cosine of an angle given in degrees.
pub fn cos(c: f32) -> f32 {
    cos_series(degrees_to_radians(reduce_degrees(c)))
}

/// Sine of an angle given in degrees.
pub fn sin(s: f32) -> f32 {
    sin_series(degrees_to_radians(reduce_degrees(s)))
}

/// Arccosine in radians.
///
/// Inputs of exactly `±1` map to `0` and `π`; inputs outside `[-1, 1]` (or
/// NaN) give NaN. If the refinement runs out of iterations the last estimate
/// is clamped to `[0, π]` and returned after logging a convergence failure.
pub fn arccos(a: f32) -> f32 {
    match try_arccos(a, &ArccosConfig::default()) {
        Ok(result) => result.angle,
        Err(ScalarError::Domain { value }) => {
            debug!(value, "arccos input outside [-1, 1]");
            f32::NAN
        }
        Err(ScalarError::DidNotConverge {
            max_iterations,
            residual,
            estimate,
        }) => {
            warn!(
                max_iterations,
                residual, estimate, "arccos ConvergenceFailure, returning clamped estimate"
            );
            estimate.clamp(0.0, PI)
        }
    }
}

/// [`arccos`] converted to degrees, matching the input unit of [`cos`] and [`sin`].
pub fn arccos_degrees(a: f32) -> f32 {
    radians_to_degrees(arccos(a))
}

/// Arccosine with an explicit iteration budget.
///
/// Newton's method on `cos(x) - a`, seeded at `π(1 - a) / 2`. Each step adds
/// `(cos(x) - a) / sin(x)` and the loop stops once a step is no larger than
/// `config.tolerance`.
pub fn try_arccos(a: f32, config: &ArccosConfig) -> Result<ArccosResult, ScalarError> {
    if a.is_nan() || !(-1.0..=1.0).contains(&a) {
        return Err(ScalarError::Domain { value: a });
    }
    // sin(x) vanishes at both ends, so the Newton step is undefined there.
    if a == 1.0 {
        return Ok(ArccosResult {
            angle: 0.0,
            iterations: 0,
            residual: 0.0,
        });
    }
    if a == -1.0 {
        return Ok(ArccosResult {
            angle: PI,
            iterations: 0,
            residual: 0.0,
        });
    }

    let mut x = PI * (1.0 - a) / 2.0;
    let mut step = f32::INFINITY;

    for iteration in 1..=config.max_iterations {
        let last = x;
        x += (cos_series(x) - a) / sin_series(x);
        step = absolute(x - last);

        if step <= config.tolerance {
            // Near a = -1 the last step can overshoot π by a few ulps of the step.
            return Ok(ArccosResult {
                angle: x.clamp(0.0, PI),
                iterations: iteration,
                residual: step,
            });
        }
    }

    Err(ScalarError::DidNotConverge {
        max_iterations: config.max_iterations,
        residual: step,
        estimate: x,
    })
}

/// Fold an angle in degrees into `(-180, 180]`, where the series is accurate.
///
/// The remainder is exact for every finite input. Infinite input gives NaN.
fn reduce_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return f32::NAN;
    }
    let mut reduced = remainder_360(absolute(degrees));
    if degrees < 0.0 {
        reduced = -reduced;
    }
    if reduced > 180.0 {
        reduced -= 360.0;
    } else if reduced <= -180.0 {
        reduced += 360.0;
    }
    reduced
}

/// `r mod 360` for finite `r >= 0` by binary long division. Each subtraction
/// has `divisor <= r < 2 * divisor`, so it is exact.
fn remainder_360(mut r: f32) -> f32 {
    let mut divisor = 360.0f32;
    while divisor * 2.0 <= r {
        divisor *= 2.0;
    }
    while r >= 360.0 {
        if r >= divisor {
            r -= divisor;
        }
        divisor *= 0.5;
    }
    r
}

fn cos_series(x: f32) -> f32 {
    (1..=SERIES_TERMS).fold(1.0, |acc, i| {
        let n = 2 * i;
        let term = power(x, n as i32) / factorial_f32(n);
        if i % 2 == 1 {
            acc - term
        } else {
            acc + term
        }
    })
}

fn sin_series(x: f32) -> f32 {
    (1..=SERIES_TERMS).fold(x, |acc, i| {
        let n = 2 * i + 1;
        let term = power(x, n as i32) / factorial_f32(n);
        if i % 2 == 1 {
            acc - term
        } else {
            acc + term
        }
    })
}
