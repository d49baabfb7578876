//! View matrices for positioning a camera.
//!
//! # Basis layout
//!
//! A view matrix maps world space into camera space. With row vectors, the
//! camera's basis vectors sit in the **columns** of the 3x3 block and the
//! translation row holds `-eye` projected onto each of them:
//!
//! ```text
//! | r.x  u.x  b.x  0 |      r = right
//! | r.y  u.y  b.y  0 |      u = up
//! | r.z  u.z  b.z  0 |      b = backward (camera looks along -b)
//! | -e.r -e.u -e.b 1 |      e = eye position
//! ```

use crate::{Mat4, Vec3};
use affine_core::Tolerances;
use tracing::trace;

impl Mat4 {
    /// View matrix for a camera at `from` looking at `to`.
    ///
    /// `up` is a reference direction; it does not need to be perpendicular
    /// to the view direction, only not parallel to it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_math::{Mat4, Vec3};
    ///
    /// let view = Mat4::look_at(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO, Vec3::Y);
    /// let p = view.transform_point(Vec3::ZERO);
    /// assert!((p - Vec3::new(0.0, 0.0, -500.0)).magnitude() < 1e-3);
    /// ```
    #[inline]
    pub fn look_at(from: Vec3, to: Vec3, up: Vec3) -> Self {
        Self::look_at_with(&Tolerances::default(), from, to, up)
    }

    /// [`Mat4::look_at`] with a custom rescaling band.
    ///
    /// When the L1 span of `to - from` falls outside
    /// `[look_at_min_span, look_at_max_span]`, the direction is first
    /// rescaled to magnitude `look_at_max_span` so that the reciprocal square
    /// root below works on a well-conditioned value.
    pub fn look_at_with(tol: &Tolerances, from: Vec3, to: Vec3, up: Vec3) -> Self {
        let mut d = to - from;

        let span = d.abs_sum();
        if tol.needs_rescale(span) {
            trace!(span, "rescaling look-at direction");
            if !d.normalize() {
                trace!(%from, %to, "zero-length look-at direction");
            }
            d *= tol.look_at_max_span;
        }

        let back = d * -(1.0 / d.magnitude());
        let right = unit(up.cross(back));
        let up = unit(back.cross(right));

        Self::from_rows([
            [right.x, up.x, back.x, 0.0],
            [right.y, up.y, back.y, 0.0],
            [right.z, up.z, back.z, 0.0],
            [-from.dot(right), -from.dot(up), -from.dot(back), 1.0],
        ])
    }

    /// Rotation-only view of direction `dir` as seen from the origin, with
    /// no roll.
    ///
    /// ```text
    /// | -z/h       0    x/h      0 |
    /// | -y*x/h     h   -y*z/h    0 |      (x, y, z) = dir normalized
    /// | -x        -y   -z        0 |      h = sqrt(x^2 + z^2)
    /// |  0         0    0        1 |
    /// ```
    ///
    /// A direction straight along the vertical axis (`h == 0`, including the
    /// zero vector) has no horizontal heading and gets a fixed basis instead.
    pub fn origin_look_at(dir: Vec3) -> Self {
        let n = dir.normalized();
        let h = (n.x * n.x + n.z * n.z).sqrt();

        if h == 0.0 {
            trace!(%dir, "vertical origin look-at, using fixed basis");
            return Self::from_rows([
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]);
        }

        let inv_h = 1.0 / h;
        Self::from_rows([
            [-n.z * inv_h, 0.0, n.x * inv_h, 0.0],
            [-(n.y * n.x) * inv_h, h, -(n.y * n.z) * inv_h, 0.0],
            [-n.x, -n.y, -n.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Normalizes with a reciprocal multiply, the same way for every basis axis.
#[inline]
fn unit(v: Vec3) -> Vec3 {
    v * (1.0 / v.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec_eq(a: Vec3, b: Vec3, eps: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_look_at_origin_down_neg_z() {
        let m = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-6);
        assert_eq!(m.translation(), Vec3::ZERO);
        assert!(m.abs_diff_eq(&Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_look_at_orthonormal_basis() {
        let from = Vec3::new(120.0, 300.0, -40.0);
        let to = Vec3::new(-15.0, 0.0, 220.0);
        let m = Mat4::look_at(from, to, Vec3::Y);

        let (r, u, b) = (m.col(0), m.col(1), m.col(2));
        for v in [r, u, b] {
            assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-5);
        }
        assert_abs_diff_eq!(r.dot(u), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(r.dot(b), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(u.dot(b), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-5);

        // Looking along -b
        assert_vec_eq(-b, (to - from).normalized(), 1e-5);
        // Right vector stays horizontal for a Y-up reference
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_look_at_maps_eye_and_target() {
        let from = Vec3::new(10.0, 20.0, 30.0);
        let to = Vec3::new(10.0, 20.0, -970.0);
        let m = Mat4::look_at(from, to, Vec3::Y);

        assert_vec_eq(m.transform_point(from), Vec3::ZERO, 1e-3);
        assert_vec_eq(m.transform_point(to), Vec3::new(0.0, 0.0, -1000.0), 1e-2);
        assert_eq!(m.m[0][3], 0.0);
        assert_eq!(m.m[3][3], 1.0);
    }

    #[test]
    fn test_look_at_rescale_band() {
        // Spans below and above the band produce the same rotation as an
        // in-band distance along the same line.
        let up = Vec3::new(0.0, 1.0, 0.0);
        let dir = Vec3::new(1.0, -2.0, 0.5);
        let near = Mat4::look_at(Vec3::ZERO, dir * 0.001, up);
        let mid = Mat4::look_at(Vec3::ZERO, dir * 100.0, up);
        let far = Mat4::look_at(Vec3::ZERO, dir * 1e6, up);
        assert!(near.abs_diff_eq(&mid, 1e-5));
        assert!(far.abs_diff_eq(&mid, 1e-5));
    }

    #[test]
    fn test_look_at_custom_band() {
        let tol = Tolerances {
            look_at_min_span: 1.0,
            look_at_max_span: 4.0,
            ..Tolerances::default()
        };
        let a = Mat4::look_at_with(&tol, Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0), Vec3::Y);
        assert!(a.abs_diff_eq(&Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_look_at_degenerate_is_non_finite() {
        // Eye on the target leaves no view direction
        let p = Vec3::new(3.0, -7.0, 12.0);
        let m = Mat4::look_at(p, p, Vec3::Y);
        assert!(!m.is_finite());
        assert!(m.m[0][..3].iter().all(|x| x.is_nan()));
        assert_eq!(m.m[0][3], 0.0);
        assert_eq!(m.m[3][3], 1.0);

        // Up reference parallel to the view direction leaves no right vector
        let m = Mat4::look_at(Vec3::ZERO, Vec3::new(0.0, 100.0, 0.0), Vec3::Y);
        assert!(!m.is_finite());
        assert!(m.m[0][0].is_nan());
        assert!(m.m[0][1].is_nan());
        assert_eq!(m.m[0][2], 0.0);
        assert_vec_eq(Vec3::new(m.m[0][2], m.m[1][2], m.m[2][2]), Vec3::new(0.0, -1.0, 0.0), 0.0);
    }

    #[test]
    fn test_look_at_inverse_is_camera_to_world() {
        let from = Vec3::new(-250.0, 80.0, 400.0);
        let m = Mat4::look_at(from, Vec3::new(0.0, 50.0, 0.0), Vec3::Y);
        let inv = m.inverse_rigid().unwrap();
        assert_vec_eq(inv.translation(), from, 1e-2);
        assert!((m * inv).abs_diff_eq(&Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn test_origin_look_at_general() {
        let dir = Vec3::new(3.0, 4.0, -12.0);
        let m = Mat4::origin_look_at(dir);
        let n = dir.normalized();

        assert_vec_eq(m.row(2), -n, 1e-6);
        assert_eq!(m.translation(), Vec3::ZERO);
        assert_abs_diff_eq!(m.determinant().abs(), 1.0, epsilon = 1e-5);
        assert!((m * m.transpose()).abs_diff_eq(&Mat4::IDENTITY, 1e-5));
        // No roll: the first row stays horizontal
        assert_eq!(m.m[0][1], 0.0);
    }

    #[test]
    fn test_origin_look_at_vertical_fallback() {
        let expected = Mat4::from_rows([
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(Mat4::origin_look_at(Vec3::new(0.0, 5.0, 0.0)), expected);
        assert_eq!(Mat4::origin_look_at(Vec3::new(0.0, -1.0, 0.0)), expected);
        assert_eq!(Mat4::origin_look_at(Vec3::ZERO), expected);
    }
}
