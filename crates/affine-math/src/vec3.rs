//! 3D vector type for positions, directions and axes.
//!
//! [`Vec3`] is a plain `f32` triple. Components are assumed finite; the
//! zero vector is a meaningful value and doubles as the result of a failed
//! [`Vec3::normalize`].
//!
//! # Usage
//!
//! ```rust
//! use affine_math::Vec3;
//!
//! let mut dir = Vec3::new(3.0, 0.0, 4.0);
//! assert_eq!(dir.magnitude(), 5.0);
//! assert!(dir.normalize());
//! assert_eq!(dir, Vec3::new(0.6, 0.0, 0.8));
//! ```

use affine_core::{Angle, StdTrig, Trig};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector.
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
///
/// # Example
///
/// ```rust
/// use affine_math::Vec3;
///
/// let a = Vec3::X;
/// let b = Vec3::Y;
/// assert_eq!(a.cross(b), Vec3::Z);
/// assert_eq!(a.dot(b), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self x other`.
    ///
    /// Returned by value, so `a = a.cross(b)` is safe.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length, `sqrt(x^2 + y^2 + z^2)`.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Sum of absolute components (L1 norm).
    #[inline]
    pub fn abs_sum(self) -> f32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Rescales the vector to unit length in place.
    ///
    /// Only an exactly-zero squared length counts as failure: the vector is
    /// set to [`Vec3::ZERO`] and `false` is returned. Tiny but non-zero
    /// vectors are normalized like any other.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_math::Vec3;
    ///
    /// let mut v = Vec3::ZERO;
    /// assert!(!v.normalize());
    /// assert_eq!(v, Vec3::ZERO);
    /// ```
    #[inline]
    pub fn normalize(&mut self) -> bool {
        let sq = self.magnitude_squared();
        if sq == 0.0 {
            *self = Self::ZERO;
            return false;
        }
        let inv = 1.0 / sq.sqrt();
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
        true
    }

    /// Returns a unit-length copy, or [`Vec3::ZERO`] for the zero vector.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Clamps each component to `[-limit, limit]`.
    #[inline]
    pub fn clamp_abs(&mut self, limit: f32) {
        self.x = self.x.clamp(-limit, limit);
        self.y = self.y.clamp(-limit, limit);
        self.z = self.z.clamp(-limit, limit);
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Rotates the pair `(x, y)` in place by `deg` degrees.
///
/// The angle goes through [`Angle::from_degrees`], so it is truncated to
/// binary angle precision first.
///
/// # Example
///
/// ```rust
/// use affine_math::rotate_2d;
///
/// let (mut x, mut y) = (1.0_f32, 0.0_f32);
/// rotate_2d(90.0, &mut x, &mut y);
/// assert!(x.abs() < 1e-6 && (y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rotate_2d(deg: f32, x: &mut f32, y: &mut f32) {
    rotate_2d_with(&StdTrig, deg, x, y);
}

/// [`rotate_2d`] with a caller-supplied [`Trig`].
pub fn rotate_2d_with<T: Trig>(trig: &T, deg: f32, x: &mut f32, y: &mut f32) {
    let (s, c) = trig.sin_cos(Angle::from_degrees(deg));
    let (x0, y0) = (*x, *y);
    *x = x0 * c - y0 * s;
    *y = x0 * s + y0 * c;
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6},{:.6}", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Component-wise
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
