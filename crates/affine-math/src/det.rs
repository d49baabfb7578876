//! Determinants, adjugate and inversion by cofactor expansion.
//!
//! Everything here is built from [`det2x2`] and [`det3x3`]. The 4x4 routines
//! read the matrix through a relabeled view where element `src[i][j]` sits at
//! `(3 - j, 3 - i)`: rows and columns reversed and swapped. Every 3x3 minor is
//! taken from that view with its rows and columns listed in descending
//! order. Reversing both three-element axes cancels out and the transpose
//! does not change a determinant, so the minors keep their textbook values.
//! The view only fixes which minor lands in which output cell.
//!
//! # Usage
//!
//! ```rust
//! use affine_math::{Mat4, Vec3};
//!
//! let mut m = Mat4::from_scale(Vec3::new(2.0, 4.0, 8.0));
//! m.add_translation(Vec3::new(1.0, 2.0, 3.0));
//!
//! let inv = m.inverse().unwrap();
//! assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-6));
//! ```

use crate::Mat4;
use affine_core::{Error, Result, Tolerances};
use tracing::debug;

/// Determinant of `| a b |` over `| c d |`.
#[inline]
pub fn det2x2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

/// Determinant of a 3x3 matrix given row by row, expanded down column 0.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn det3x3(
    r0c0: f32, r0c1: f32, r0c2: f32,
    r1c0: f32, r1c1: f32, r1c2: f32,
    r2c0: f32, r2c1: f32, r2c2: f32,
) -> f32 {
    r0c0 * det2x2(r1c1, r1c2, r2c1, r2c2)
        - r1c0 * det2x2(r0c1, r0c2, r2c1, r2c2)
        + r2c0 * det2x2(r0c1, r0c2, r1c1, r1c2)
}

/// Determinant of a 4x4 matrix.
#[inline]
pub fn det4x4(m: &Mat4) -> f32 {
    let v = Relabeled(m);
    let cols = others(3);
    v.at(3, 3) * v.minor(others(3), cols)
        - v.at(2, 3) * v.minor(others(2), cols)
        + v.at(1, 3) * v.minor(others(1), cols)
        - v.at(0, 3) * v.minor(others(0), cols)
}

/// Transpose of the cofactor matrix.
pub fn adjugate(m: &Mat4) -> Mat4 {
    let v = Relabeled(m);
    let mut out = Mat4::ZERO;
    for r in 0..4 {
        for c in 0..4 {
            let minor = v.minor(others(3 - r), others(3 - c));
            out.m[r][c] = if (r + c) % 2 == 0 { minor } else { -minor };
        }
    }
    out
}

/// Read-only view addressing `src[i][j]` as `(3 - j, 3 - i)`.
#[derive(Clone, Copy)]
struct Relabeled<'a>(&'a Mat4);

impl Relabeled<'_> {
    #[inline]
    fn at(self, row: usize, col: usize) -> f32 {
        self.0.m[3 - col][3 - row]
    }

    #[inline]
    fn minor(self, rows: [usize; 3], cols: [usize; 3]) -> f32 {
        let e = |i: usize, j: usize| self.at(rows[i], cols[j]);
        det3x3(
            e(0, 0), e(0, 1), e(0, 2),
            e(1, 0), e(1, 1), e(1, 2),
            e(2, 0), e(2, 1), e(2, 2),
        )
    }
}

/// The three indices of `0..4` other than `skip`, highest first.
#[inline]
fn others(skip: usize) -> [usize; 3] {
    let mut out = [0; 3];
    let mut n = 0;
    for i in (0..4).rev().filter(|&i| i != skip) {
        out[n] = i;
        n += 1;
    }
    out
}

fn scaled(adj: Mat4, det: f32) -> Mat4 {
    let mut out = adj;
    out.m.iter_mut().flatten().for_each(|x| *x /= det);
    out
}

impl Mat4 {
    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        det4x4(self)
    }

    /// Computes the adjugate (transposed cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        adjugate(self)
    }

    /// Computes the inverse with the default [`Tolerances`].
    ///
    /// Returns [`Error::SingularMatrix`] if `|det| < 1e-5`; no partial result
    /// is produced in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_math::Mat4;
    ///
    /// let singular = Mat4::from_rows([
    ///     [1.0, 2.0, 3.0, 0.0],
    ///     [1.0, 2.0, 3.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert!(singular.inverse().is_err());
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(&Tolerances::default())
    }

    /// Computes the inverse, `adjugate / det`, against a custom threshold.
    pub fn inverse_with(&self, tol: &Tolerances) -> Result<Self> {
        let det = det4x4(self);
        if det.abs() < tol.singular_epsilon {
            debug!(det, eps = tol.singular_epsilon, "rejecting singular matrix");
            return Err(Error::singular(det));
        }
        Ok(scaled(adjugate(self), det))
    }

    /// Inverts a transform with unit determinant.
    ///
    /// Divides the adjugate by the adjugate's own determinant, which is
    /// `det^3`. That matches [`Mat4::inverse`] for rotations, look-at views
    /// and their translations. For anything that scales it does not.
    #[inline]
    pub fn inverse_rigid(&self) -> Result<Self> {
        self.inverse_rigid_with(&Tolerances::default())
    }

    /// [`Mat4::inverse_rigid`] against a custom threshold.
    pub fn inverse_rigid_with(&self, tol: &Tolerances) -> Result<Self> {
        let adj = adjugate(self);
        let det = det4x4(&adj);
        if det.abs() < tol.singular_epsilon {
            debug!(det, eps = tol.singular_epsilon, "rejecting singular matrix");
            return Err(Error::singular(det));
        }
        Ok(scaled(adj, det))
    }
}
