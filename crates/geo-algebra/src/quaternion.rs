use scalar_math::{absolute, arccos, cos, power, sin, sqrt};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};
use tracing::debug;

use crate::vector::Vector3;

/// A quaternion `xi + yj + zk + w`, with `w` the scalar part.
///
/// Defaults to the identity rotation `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vector3> for Quaternion {
    fn from(v: Vector3) -> Self {
        Self::from_vector(v, 1.0)
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Embed `v` as the vector part with the given scalar part.
    pub fn from_vector(v: Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Rotation of `degrees` about `axis` (right-handed). The axis need not be unit length.
    pub fn from_axis_angle(axis: Vector3, degrees: f32) -> Self {
        let half = degrees * 0.5;
        Self::from_vector(axis.normalise() * sin(half), cos(half))
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// The vector part `(x, y, z)`.
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn norm_squared(&self) -> f32 {
        power(self.x, 2) + power(self.y, 2) + power(self.z, 2) + power(self.w, 2)
    }

    pub fn magnitude(&self) -> f32 {
        let squared = self.norm_squared();
        if squared == 0.0 {
            return 0.0;
        }
        sqrt(squared)
    }

    /// Divide by the magnitude, treated as the scalar quaternion `(0, 0, 0, |q|)`.
    pub fn normalise(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            debug!("normalising a zero quaternion");
        }
        *self / Self::new(0.0, 0.0, 0.0, magnitude)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse `q* / |q|²`, valid for any non-zero quaternion.
    pub fn reciprocal(&self) -> Self {
        self.conjugate() / self.norm_squared()
    }

    /// Inverse rotation: the conjugate of the normalised quaternion.
    pub fn inverse(&self) -> Self {
        self.normalise().conjugate()
    }

    /// Four-component dot product. Unlike [`Vector3::dot`] the operands are
    /// not normalised first.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// `arccos` of the dot product, in radians.
    pub fn angle(&self, other: &Self) -> f32 {
        arccos(self.dot(other).clamp(-1.0, 1.0))
    }

    /// The rotation taking this orientation to `other`: `self⁻¹ · other`.
    pub fn relative(&self, other: &Self) -> Self {
        self.inverse() * other.normalise()
    }

    /// Rotate `v` by the rotation this quaternion represents.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let unit = self.normalise();
        (unit * Self::from_vector(*v, 0.0) * unit.conjugate()).vector()
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        absolute(self.x - other.x) <= tolerance
            && absolute(self.y - other.y) <= tolerance
            && absolute(self.z - other.z) <= tolerance
            && absolute(self.w - other.w) <= tolerance
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn from_array(arr: [f32; 4]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }
}

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

/// `self · rhs⁻¹`.
impl Div for Quaternion {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.reciprocal()
    }
}

impl Add<f32> for Quaternion {
    type Output = Self;
    fn add(self, rhs: f32) -> Self::Output {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs, self.w + rhs)
    }
}

impl Sub<f32> for Quaternion {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self::Output {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs, self.w - rhs)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tolerance;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_quat_near(a: Quaternion, b: Quaternion) {
        let tol = Tolerance {
            coincidence: 1e-4,
            ..Tolerance::default()
        };
        assert!(tol.quaternions_coincident(&a, &b), "{a:?} != {b:?}");
    }

    fn assert_vec_near(a: Vector3, b: Vector3) {
        assert!(a.approx_eq(&b, 1e-4), "{a:?} != {b:?}");
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::identity(), Quaternion::default());
        assert_abs_diff_eq!(Quaternion::default().magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_from_vector() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::from(v), Quaternion::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Quaternion::from_vector(v, 0.0), Quaternion::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Quaternion::from_vector(v, 5.0).vector(), v);
    }

    #[test]
    fn test_hamilton_basis_products() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let minus_one = Quaternion::new(0.0, 0.0, 0.0, -1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * i, k * -1.0);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, minus_one);
        assert_eq!(i * j * k, minus_one);
    }

    #[test]
    fn test_identity_is_neutral() {
        let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }

    #[test]
    fn test_division_undoes_multiplication() {
        let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q = Quaternion::new(-0.5, 0.25, 2.0, 1.0);
        assert_quat_near((p * q) / q, p);
        assert_quat_near(q / q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_scalar_operators() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q + 1.0, Quaternion::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(q - 1.0, Quaternion::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(q * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(q / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_magnitude_and_normalise() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(q.magnitude(), 2.0, epsilon = 1e-5);
        assert_quat_near(q.normalise(), Quaternion::new(0.5, 0.5, 0.5, 0.5));
        assert_abs_diff_eq!(
            Quaternion::new(3.0, 0.0, 4.0, 0.0).normalise().magnitude(),
            1.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_normalise_matches_scalar_division() {
        let q = Quaternion::new(2.0, -1.0, 0.5, 3.0);
        assert_quat_near(q.normalise(), q / q.magnitude());
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_inverse_of_unit_quaternion() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, 3.0), 40.0);
        assert_quat_near(q * q.inverse(), Quaternion::IDENTITY);
        assert_quat_near(q.inverse() * q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_inverse_round_trip() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_quat_near(q.inverse().inverse(), q.normalise());
    }

    #[test]
    fn test_reciprocal_of_non_unit() {
        let q = Quaternion::new(0.0, 2.0, 0.0, 2.0);
        assert_quat_near(q * q.reciprocal(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_dot_is_not_normalised() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(2.0, 0.0, 1.0, 1.0);
        assert_eq!(a.dot(&b), 9.0);
    }

    #[test]
    fn test_angle() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        assert_abs_diff_eq!(Quaternion::IDENTITY.angle(&i), FRAC_PI_2, epsilon = 1e-4);
        assert_abs_diff_eq!(
            Quaternion::IDENTITY.angle(&Quaternion::IDENTITY),
            0.0,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Quaternion::IDENTITY.angle(&Quaternion::new(0.0, 0.0, 0.0, -1.0)),
            PI,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_relative_rotation() {
        let a = Quaternion::from_axis_angle(Vector3::Z, 30.0);
        let b = Quaternion::from_axis_angle(Vector3::Z, 75.0);
        let rel = a.relative(&b);
        assert_quat_near(rel, Quaternion::from_axis_angle(Vector3::Z, 45.0));
        assert_quat_near(a * rel, b);
    }

    #[test]
    fn test_relative_to_self_is_identity() {
        let q = Quaternion::new(0.3, -0.2, 0.5, 0.8);
        assert_quat_near(q.relative(&q), Quaternion::IDENTITY);
    }

    #[test]
    fn test_rotate_vector() {
        let quarter_z = Quaternion::from_axis_angle(Vector3::Z, 90.0);
        assert_vec_near(quarter_z.rotate(&Vector3::X), Vector3::Y);
        assert_vec_near(quarter_z.rotate(&Vector3::Z), Vector3::Z);

        let half_x = Quaternion::from_axis_angle(Vector3::X * 4.0, 180.0);
        assert_vec_near(half_x.rotate(&Vector3::Y), -Vector3::Y);
    }

    #[test]
    fn test_rotate_by_identity() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_vec_near(Quaternion::IDENTITY.rotate(&v), v);
    }

    #[test]
    fn test_array_conversion() {
        let q = Quaternion::from_array([0.1, 0.2, 0.3, 0.9]);
        assert_eq!(q.to_array(), [0.1, 0.2, 0.3, 0.9]);
    }

    #[test]
    fn test_serde_json() {
        let q = Quaternion::new(0.0, 0.5, -1.0, 2.0);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
