//! Rotation matrices: axis-angle, absolute axes, Euler sequences and
//! quaternions.
//!
//! All matrices follow the row-vector convention of [`Mat4`], so each is the
//! transpose of the textbook column-vector form. A positive angle about an
//! axis turns counter-clockwise when looking down that axis towards the
//! origin.
//!
//! Two angle conventions meet here:
//!
//! - [`Mat4::rotation`] takes a precomputed sine and cosine of the full
//!   rotation angle.
//! - [`Mat4::rotation_angular`] takes a *half* angle in degrees and doubles
//!   it before evaluating the trig collaborator. The absolute-axis helpers
//!   halve the caller's angle before calling it, so they rotate by exactly
//!   the degrees given.
//!
//! # Usage
//!
//! ```rust
//! use affine_math::{Axis, Mat4, Vec3};
//!
//! let mut m = Mat4::IDENTITY;
//! m.rotate_about_axis(Axis::Z, 90.0);
//!
//! let v = m.transform_vector(Vec3::X);
//! assert!((v - Vec3::Y).magnitude() < 1e-6);
//! ```

use crate::{Mat4, Vec3};
use affine_core::{Angle, Error, Result, StdTrig, Trig};
use std::fmt;
use tracing::debug;

/// Adjacent side used by [`Mat4::offset_rotation`]: the rotation angle is
/// `atan(|offset| / OFFSET_ROTATION_ADJACENT)`.
pub const OFFSET_ROTATION_ADJACENT: f32 = 100.0;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// X axis, id 0
    X,
    /// Y axis, id 1
    Y,
    /// Z axis, id 2
    Z,
}

impl Axis {
    /// All axes in application order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit basis vector along this axis.
    #[inline]
    pub const fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Numeric identifier (0, 1, 2).
    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Axis {
    type Error = Error;

    fn try_from(id: i32) -> Result<Self> {
        match id {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => {
                debug!(id, "rejecting axis id");
                Err(Error::bad_axis(id))
            }
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Quaternion stored scalar-first as `[w, x, y, z]`.
///
/// Index 0 is the scalar part and 1..=3 the vector part, which is what the
/// cyclic `i -> j -> k` walks in [`Mat4::from_quat`] and
/// [`Quat::rotate_axis`] rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat(pub [f32; 4]);

impl Quat {
    /// Identity rotation.
    pub const IDENTITY: Self = Self([1.0, 0.0, 0.0, 0.0]);

    /// Creates a quaternion from scalar and vector parts.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self([w, x, y, z])
    }

    /// Rotation of `rad` radians about a unit `axis`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Self {
        let (s, c) = (rad * 0.5).sin_cos();
        Self([c, axis.x * s, axis.y * s, axis.z * s])
    }

    /// Scalar part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[0]
    }

    /// Vector part.
    #[inline]
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.0[1], self.0[2], self.0[3])
    }

    /// Applies an in-place rotation step about vector index `i` (1..=3).
    ///
    /// `c`/`s` are the cosine and sine of the step angle. `sign` (+1 or -1)
    /// selects the direction of the scalar/`i` mixing; the `j`/`k` pair is
    /// always mixed with the unsigned sine.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `1..=3`.
    pub fn rotate_axis(&mut self, i: usize, c: f32, s: f32, sign: f32) {
        assert!((1..=3).contains(&i), "quaternion axis index {i} not in 1..=3");
        let (j, k) = cyclic(i);
        let q = &mut self.0;

        let qi = q[i];
        let signed = sign * s;
        q[i] = signed * q[0] + qi * c;
        q[0] = q[0] * c - signed * qi;

        let qj = q[j];
        q[j] = q[k] * s + qj * c;
        q[k] = q[k] * c - s * qj;
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = &self.0;
        write!(f, "{:.6} {:.6} {:.6} {:.6}", q[0], q[1], q[2], q[3])
    }
}

/// Next two indices after `i` in the cycle 1 -> 2 -> 3 -> 1.
#[inline]
fn cyclic(i: usize) -> (usize, usize) {
    let j = i % 3 + 1;
    let k = j % 3 + 1;
    (j, k)
}

impl Mat4 {
    /// Rotation about `axis` given the sine and cosine of the angle.
    ///
    /// The axis is used as passed; a non-unit axis also scales and shears.
    ///
    /// ```text
    /// | t*x*x + c    t*x*y + s*z  t*x*z - s*y  0 |
    /// | t*x*y - s*z  t*y*y + c    t*y*z + s*x  0 |     t = 1 - c
    /// | t*x*z + s*y  t*y*z - s*x  t*z*z + c    0 |
    /// | 0            0            0            1 |
    /// ```
    pub fn rotation(axis: Vec3, sin: f32, cos: f32) -> Self {
        let Vec3 { x, y, z } = axis;
        let t = 1.0 - cos;
        let (txy, txz, tyz) = (t * x * y, t * x * z, t * y * z);
        let (sx, sy, sz) = (sin * x, sin * y, sin * z);

        Self::from_rows([
            [t * x * x + cos, txy + sz, txz - sy, 0.0],
            [txy - sz, t * y * y + cos, tyz + sx, 0.0],
            [txz + sy, tyz - sx, t * z * z + cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about `axis` by `2 * half_deg` degrees.
    #[inline]
    pub fn rotation_angular(axis: Vec3, half_deg: f32) -> Self {
        Self::rotation_angular_with(&StdTrig, axis, half_deg)
    }

    /// [`Mat4::rotation_angular`] with a caller-supplied [`Trig`].
    pub fn rotation_angular_with<T: Trig>(trig: &T, axis: Vec3, half_deg: f32) -> Self {
        let (s, c) = trig.sin_cos(Angle::from_degrees(half_deg * 2.0));
        Self::rotation(axis, s, c)
    }

    /// Rotates `self` by `deg` degrees about a coordinate axis: `self = self * R`.
    #[inline]
    pub fn rotate_about_axis(&mut self, axis: Axis, deg: f32) {
        self.rotate_about_axis_with(&StdTrig, axis, deg);
    }

    /// [`Mat4::rotate_about_axis`] with a caller-supplied [`Trig`].
    pub fn rotate_about_axis_with<T: Trig>(&mut self, trig: &T, axis: Axis, deg: f32) {
        let r = Self::rotation_angular_with(trig, axis.unit(), deg / 2.0);
        *self = self.mul_mat(&r);
    }

    /// [`Mat4::rotate_about_axis`] for a raw axis id.
    ///
    /// Returns [`Error::BadAxis`] and leaves `self` untouched for ids other
    /// than 0, 1, 2.
    #[inline]
    pub fn rotate_about_axis_id(&mut self, id: i32, deg: f32) -> Result<()> {
        let axis = Axis::try_from(id)?;
        self.rotate_about_axis(axis, deg);
        Ok(())
    }

    /// Applies `v.x` degrees about X, then `v.y` about Y, then `v.z` about Z.
    ///
    /// Components that are exactly zero are skipped. This is an Euler
    /// sequence, not a rotation about the direction of `v`.
    #[inline]
    pub fn rotate_about_vector(&mut self, v: Vec3) {
        self.rotate_about_vector_with(&StdTrig, v);
    }

    /// [`Mat4::rotate_about_vector`] with a caller-supplied [`Trig`].
    pub fn rotate_about_vector_with<T: Trig>(&mut self, trig: &T, v: Vec3) {
        for (axis, deg) in Axis::ALL.into_iter().zip([v.x, v.y, v.z]) {
            if deg != 0.0 {
                self.rotate_about_axis_with(trig, axis, deg);
            }
        }
    }

    /// Rotates `self` by `deg` degrees about the vector held in its own
    /// basis row `row` (0..=2): `self = self * R`.
    ///
    /// The row is not normalized first.
    pub fn rotate_about_row(&mut self, row: usize, deg: f32) -> Result<()> {
        if row > 2 {
            return Err(Error::row_out_of_range(row));
        }
        let r = Self::rotation_angular(self.row(row), deg / 2.0);
        *self = self.mul_mat(&r);
        Ok(())
    }

    /// Rotation tilting by `atan(|offset| / 100)` about `(-y, -x, -z)`.
    ///
    /// Returns `None` for a zero offset.
    pub fn offset_rotation(x: f32, y: f32, z: f32) -> Option<Self> {
        let opp = (x * x + y * y + z * z).sqrt();
        if opp == 0.0 {
            return None;
        }
        let adj = OFFSET_ROTATION_ADJACENT;
        let hyp = (adj * adj + opp * opp).sqrt();
        let axis = Vec3::new(-y / opp, -x / opp, -z / opp);
        Some(Self::rotation(axis, opp / hyp, adj / hyp))
    }

    /// Post-multiplies `self` by [`Mat4::offset_rotation`]. No-op for a zero
    /// offset.
    pub fn apply_offset_rotation(&mut self, x: f32, y: f32, z: f32) {
        if let Some(r) = Self::offset_rotation(x, y, z) {
            *self = self.mul_mat(&r);
        }
    }

    /// Rotation matrix from a quaternion.
    ///
    /// The derivation fills rows and columns 1..=3, then row 0 is reset to
    /// `[1, 0, 0, 0]` and [`Mat4::shift_rows_up`] moves the block into
    /// place, leaving a zero translation.
    ///
    /// ```text
    /// | w2+x2-y2-z2  2xy+2wz      2xz-2wy      0 |
    /// | 2xy-2wz      w2+y2-x2-z2  2yz+2wx      0 |
    /// | 2xz+2wy      2yz-2wx      w2+z2-x2-y2  0 |
    /// | 0            0            0            1 |
    /// ```
    pub fn from_quat(q: Quat) -> Self {
        let q = q.0;
        let sq = q.map(|v| v * v);
        let mut m = Self::IDENTITY;

        for i in 1..4 {
            let (j, k) = cyclic(i);
            let two_ij = 2.0 * q[i] * q[j];
            let two_0k = 2.0 * q[k] * q[0];

            m.m[j][i] = two_ij - two_0k;
            m.m[i][j] = two_ij + two_0k;
            m.m[i][i] = sq[i] + sq[0] - sq[j] - sq[k];
            m.m[i][0] = 0.0;
        }

        m.m[0] = [1.0, 0.0, 0.0, 0.0];
        m.shift_rows_up();
        m
    }
}

/// Writes the rotation matrix of `q` into `m`.
///
/// Every element of `m` is overwritten.
#[inline]
pub fn quat_to_matrix(q: Quat, m: &mut Mat4) {
    *m = Mat4::from_quat(q);
}
