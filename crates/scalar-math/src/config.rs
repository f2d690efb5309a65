//! Iteration counts, series lengths and tolerances for the scalar approximations.

use std::f32::consts::PI;

/// Number of Heron refinements performed by [`crate::sqrt`].
pub const HERON_ITERATIONS: usize = 10;

/// Number of correction terms added after the leading term of the sine and
/// cosine Maclaurin series.
pub const SERIES_TERMS: u32 = 10;

/// Degrees to radians (`π/180`).
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Radians to degrees (`180/π`).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Largest `n` for which `n!` fits in an `i32`.
pub const MAX_EXACT_FACTORIAL: i32 = 12;

/// Configuration for the Newton refinement in [`crate::try_arccos`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArccosConfig {
    /// Upper bound on refinement steps before giving up.
    pub max_iterations: usize,
    /// Iteration stops once two successive estimates differ by no more than this.
    pub tolerance: f32,
}

impl Default for ArccosConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            tolerance: 1e-5,
        }
    }
}
