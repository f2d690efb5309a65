use scalar_math::{absolute, arccos, power, sqrt};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::debug;

/// A vector in 3D Euclidean space.
///
/// Equality is exact per component. Use [`Vector3::approx_eq`] for
/// computed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude_squared(&self) -> f32 {
        power(self.x, 2) + power(self.y, 2) + power(self.z, 2)
    }

    /// Euclidean length. The zero vector has length 0.
    pub fn magnitude(&self) -> f32 {
        let squared = self.magnitude_squared();
        // Heron's method divides by its seed, so 0 is special-cased.
        if squared == 0.0 {
            return 0.0;
        }
        sqrt(squared)
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector has no direction and yields NaN components.
    pub fn normalise(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            debug!("normalising a zero-length vector");
        }
        *self / magnitude
    }

    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).magnitude()
    }

    /// Dot product of the two *normalised* vectors, i.e. the cosine of the
    /// angle between them. See [`Vector3::dot_unnormalised`] for the raw product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.normalise().dot_unnormalised(&other.normalise())
    }

    pub fn dot_unnormalised(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between the two directions, in radians.
    pub fn angle(&self, other: &Self) -> f32 {
        arccos(self.dot(other).clamp(-1.0, 1.0))
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        absolute(self.x - other.x) <= tolerance
            && absolute(self.y - other.y) <= tolerance
            && absolute(self.z - other.z) <= tolerance
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vector3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Vector3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Self;
    fn add(self, rhs: f32) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
