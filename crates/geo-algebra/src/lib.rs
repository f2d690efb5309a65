//! 3D vector and quaternion value types whose every numeric step goes
//! through `scalar-math`.

pub mod quaternion;
pub mod vector;

pub use quaternion::Quaternion;
pub use scalar_math;
pub use vector::Vector3;

use scalar_math::power;

/// Tolerances for approximate comparisons.
///
/// `PartialEq` on [`Vector3`] and [`Quaternion`] is exact; use these when
/// results have passed through the series or root approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Components closer than this are considered equal.
    pub coincidence: f32,
    /// Angles smaller than this (radians) are considered zero.
    pub angular: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-5,
            angular: 1e-4,
        }
    }
}

impl Tolerance {
    pub fn vectors_coincident(&self, a: &Vector3, b: &Vector3) -> bool {
        a.approx_eq(b, self.coincidence)
    }

    pub fn quaternions_coincident(&self, a: &Quaternion, b: &Quaternion) -> bool {
        a.approx_eq(b, self.coincidence)
    }

    /// Same direction to within `angular` radians. Zero vectors have no
    /// direction and are never parallel.
    ///
    /// Compares `|â × b̂|² = sin²θ` against `angular²` rather than going
    /// through `arccos`, which cannot resolve angles this small near 1.
    pub fn vectors_parallel(&self, a: &Vector3, b: &Vector3) -> bool {
        let sine_squared = a.normalise().cross(&b.normalise()).magnitude_squared();
        a.dot_unnormalised(b) > 0.0 && sine_squared <= power(self.angular, 2)
    }

    /// Both quaternions describe the same rotation to within `angular`
    /// radians. Scale is ignored, and `q` and `-q` coincide.
    ///
    /// The vector part of the relative rotation has length `sin(θ/2)`.
    pub fn rotations_coincident(&self, a: &Quaternion, b: &Quaternion) -> bool {
        let half_sine_squared = a.relative(b).vector().magnitude_squared();
        half_sine_squared <= power(self.angular * 0.5, 2)
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
