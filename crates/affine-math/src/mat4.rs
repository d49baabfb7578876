//! 4x4 affine transform matrix.
//!
//! [`Mat4`] holds a rotation/scale block, a translation and a homogeneous
//! column. Every transform built by this crate keeps column 3 at
//! `[0, 0, 0, 1]`.
//!
//! # Convention
//!
//! Matrices are stored **row-major** and multiply **row vectors** from the
//! left:
//!
//! ```text
//!                 | m00 m01 m02 0 |
//! [x y z 1]   *   | m10 m11 m12 0 |   =   [x' y' z' 1]
//!                 | m20 m21 m22 0 |
//!                 | tx  ty  tz  1 |
//! ```
//!
//! So `x' = m00*x + m10*y + m20*z + tx`, and `a * b` applies `a` first.
//!
//! # Usage
//!
//! ```rust
//! use affine_math::{Mat4, Vec3};
//!
//! let mut m = Mat4::IDENTITY;
//! m.scale_by_vec(Vec3::new(2.0, 2.0, 2.0));
//! m.add_translation(Vec3::new(0.0, 1.0, 0.0));
//!
//! let p = m.transform_point(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vec3::new(2.0, 3.0, 2.0));
//! ```

use crate::Vec3;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 4x4 affine transform, addressed `m[row][col]`.
///
/// # Example
///
/// ```rust
/// use affine_math::Mat4;
///
/// let m = Mat4::IDENTITY;
/// assert_eq!(m * m, m);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates an affine matrix from a 3x3 linear block and a translation.
    #[inline]
    pub const fn from_linear(linear: [[f32; 3]; 3], translation: Vec3) -> Self {
        let l = linear;
        Self::from_rows([
            [l[0][0], l[0][1], l[0][2], 0.0],
            [l[1][0], l[1][1], l[1][2], 0.0],
            [l[2][0], l[2][1], l[2][2], 0.0],
            [translation.x, translation.y, translation.z, 1.0],
        ])
    }

    /// Creates a pure translation.
    #[inline]
    pub const fn from_translation(t: Vec3) -> Self {
        Self::from_linear([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], t)
    }

    /// Creates a diagonal scale matrix.
    #[inline]
    pub const fn from_scale(s: Vec3) -> Self {
        Self::from_linear([[s.x, 0.0, 0.0], [0.0, s.y, 0.0], [0.0, 0.0, s.z]], Vec3::ZERO)
    }

    /// Overwrites `self` with the identity.
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Copies every element of `src` into `self`.
    #[inline]
    pub fn copy_from(&mut self, src: &Self) {
        self.m = src.m;
    }

    /// Returns the first three elements of row `i` as a Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[i][0], self.m[i][1], self.m[i][2])
    }

    /// Returns the first three elements of column `j` as a Vec3.
    #[inline]
    pub fn col(&self, j: usize) -> Vec3 {
        Vec3::new(self.m[0][j], self.m[1][j], self.m[2][j])
    }

    /// Translation part (row 3).
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.row(3)
    }

    /// Adds `v` onto the translation row. Accumulates, never overwrites.
    #[inline]
    pub fn add_translation(&mut self, v: Vec3) {
        self.m[3][0] += v.x;
        self.m[3][1] += v.y;
        self.m[3][2] += v.z;
    }

    /// Scales the basis rows of the 3x3 block by `v.x`, `v.y`, `v.z`.
    ///
    /// Translation and the homogeneous column are left alone.
    #[inline]
    pub fn scale_by_vec(&mut self, v: Vec3) {
        for (row, s) in self.m.iter_mut().zip([v.x, v.y, v.z]) {
            row[0] *= s;
            row[1] *= s;
            row[2] *= s;
        }
    }

    /// Moves the lower-right 3x3 block up and left by one, puts the old
    /// `m[0][1..4]` into the translation row and resets column 3 to
    /// `[0, 0, 0, 1]`.
    ///
    /// Finishes [`Mat4::from_quat`], whose derivation fills rows and
    /// columns 1..=3.
    pub fn shift_rows_up(&mut self) {
        let top = [self.m[0][1], self.m[0][2], self.m[0][3]];
        for i in 1..4 {
            for j in 1..4 {
                self.m[i - 1][j - 1] = self.m[i][j];
            }
        }
        self.m[0][3] = 0.0;
        self.m[1][3] = 0.0;
        self.m[2][3] = 0.0;
        self.m[3][3] = 1.0;
        self.m[3][..3].copy_from_slice(&top);
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut t = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                t.m[j][i] = self.m[i][j];
            }
        }
        t
    }

    /// Multiplies two matrices, `self * other`.
    ///
    /// The product is built in a fresh matrix, so `*a = a.mul_mat(&a)` and
    /// friends are fine.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..4 {
            for j in 0..4 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        result
    }

    /// Applies the 3x3 block and the translation to a point.
    #[inline]
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        self.transform_vector(v) + self.translation()
    }

    /// Applies only the 3x3 block to a direction.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    /// [`Mat4::transform_point`] writing back into `v`.
    #[inline]
    pub fn transform_point_in_place(&self, v: &mut Vec3) {
        *v = self.transform_point(*v);
    }

    /// [`Mat4::transform_vector`] writing back into `v`.
    #[inline]
    pub fn transform_vector_in_place(&self, v: &mut Vec3) {
        *v = self.transform_vector(*v);
    }

    /// Element-wise reciprocal. Zero elements become infinities.
    ///
    /// Not an inverse; see [`Mat4::inverse`] for that.
    #[inline]
    pub fn invert_elements(&self) -> Self {
        let mut out = *self;
        out.m.iter_mut().flatten().for_each(|x| *x = 1.0 / *x);
        out
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }

    /// Returns true if every element is within `eps` of `other`'s.
    #[inline]
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Converts to glam Mat4.
    ///
    /// glam is column-major with column vectors. Our row-vector matrix `M`
    /// corresponds to glam's `M^T`, which has exactly this memory layout.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.m)
    }

    /// Creates from glam Mat4. Inverse of [`Mat4::to_glam`].
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_rows(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            writeln!(f, "{:.6} {:.6} {:.6} {:.6}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Vec3 * Mat4 (point)
impl Mul<Mat4> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Mat4) -> Vec3 {
        rhs.transform_point(self)
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 4] {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [f32; 4] {
        &mut self.m[i]
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    #[inline]
    fn from(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Mat4 {
        Mat4::from_rows([
            [1.0, 2.0, 3.0, 0.0],
            [-4.0, 5.5, 6.0, 0.0],
            [7.0, 0.25, -9.0, 0.0],
            [10.0, -11.0, 12.0, 1.0],
        ])
    }

    #[test]
    fn test_identity_multiply() {
        let m = sample();
        assert_eq!(Mat4::IDENTITY * m, m);
        assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn test_set_identity_and_copy() {
        let mut m = sample();
        let mut c = Mat4::ZERO;
        c.copy_from(&m);
        assert_eq!(c, m);
        m.set_identity();
        assert_eq!(m, Mat4::IDENTITY);
        // copy is independent of its source
        assert_eq!(c, sample());
    }

    #[test]
    fn test_mul_aliasing() {
        let a = sample();
        let expected = a.mul_mat(&a);
        let mut b = a;
        b *= b;
        assert_eq!(b, expected);
    }

    #[test]
    fn test_mul_applies_left_first() {
        let s = Mat4::from_scale(Vec3::splat(2.0));
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!((s * t).transform_point(p), Vec3::new(3.0, 2.0, 2.0));
        assert_eq!((t * s).transform_point(p), Vec3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn test_scale_by_vec_identity() {
        let mut m = Mat4::IDENTITY;
        m.scale_by_vec(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(
            m,
            Mat4::from_rows([
                [2.0, 0.0, 0.0, 0.0],
                [0.0, 3.0, 0.0, 0.0],
                [0.0, 0.0, 4.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_scale_by_vec_leaves_translation() {
        let mut m = sample();
        m.scale_by_vec(Vec3::new(2.0, 0.5, -1.0));
        assert_eq!(m.m[0], [2.0, 4.0, 6.0, 0.0]);
        assert_eq!(m.m[1], [-2.0, 2.75, 3.0, 0.0]);
        assert_eq!(m.m[2], [-7.0, -0.25, 9.0, 0.0]);
        assert_eq!(m.m[3], sample().m[3]);
    }

    #[test]
    fn test_add_translation_accumulates() {
        let mut m = Mat4::IDENTITY;
        m.add_translation(Vec3::new(1.0, 2.0, 3.0));
        m.add_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.translation(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(m.m[3][3], 1.0);
    }

    #[test]
    fn test_shift_rows_up() {
        let mut m = Mat4::from_rows([
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ]);
        m.shift_rows_up();
        assert_eq!(
            m,
            Mat4::from_rows([
                [5.0, 6.0, 7.0, 0.0],
                [9.0, 10.0, 11.0, 0.0],
                [13.0, 14.0, 15.0, 0.0],
                [1.0, 2.0, 3.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_transform_point_and_vector() {
        let m = sample();
        let v = Vec3::new(1.0, 2.0, 3.0);
        // Row-vector product against the columns of the 3x3 block
        let linear = Vec3::new(1.0 - 8.0 + 21.0, 2.0 + 11.0 + 0.75, 3.0 + 12.0 - 27.0);
        assert_eq!(m.transform_vector(v), linear);
        assert_eq!(m.transform_point(v), linear + Vec3::new(10.0, -11.0, 12.0));
        assert_eq!(v * m, m.transform_point(v));

        let mut w = v;
        m.transform_vector_in_place(&mut w);
        assert_eq!(w, linear);
        let mut p = v;
        m.transform_point_in_place(&mut p);
        assert_eq!(p, m.transform_point(v));
    }

    #[test]
    fn test_transpose() {
        let t = sample().transpose();
        assert_eq!(t.m[0][1], -4.0);
        assert_eq!(t.m[3][0], 0.0);
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn test_invert_elements() {
        let m = Mat4::from_rows([[2.0; 4], [4.0; 4], [0.5; 4], [-1.0; 4]]);
        let r = m.invert_elements();
        assert_eq!(r.m[0], [0.5; 4]);
        assert_eq!(r.m[2], [2.0; 4]);
        assert!(!Mat4::IDENTITY.invert_elements().is_finite());
    }

    #[test]
    fn test_glam_convention() {
        let m = sample();
        let p = Vec3::new(0.5, -1.0, 2.0);
        let ours = m.transform_point(p);
        let theirs = m.to_glam().transform_point3(p.to_glam());
        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-5);
        assert_eq!(Mat4::from(glam::Mat4::from(m)), m);
    }

    #[test]
    fn test_display() {
        let text = Mat4::IDENTITY.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1.000000 0.000000 0.000000 0.000000"));
    }
}
