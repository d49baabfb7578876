//! Binary angles and the trigonometry seam.
//!
//! Rotations in affine-rs are specified in degrees but evaluated in a 16-bit
//! binary angle unit: `0x10000` units make one full turn and the value wraps
//! on overflow, so 360 degrees is exactly angle `0`.
//!
//! Sine and cosine over that unit come from a [`Trig`] implementation. The
//! default, [`StdTrig`], evaluates `f32::sin`/`f32::cos` on the exact angle.
//! A renderer that needs table-driven trigonometry plugs its own
//! implementation in through the `*_with` constructors in `affine-math`.
//!
//! # Usage
//!
//! ```rust
//! use affine_core::{Angle, StdTrig, Trig};
//!
//! let quarter = Angle::from_degrees(90.0);
//! assert_eq!(quarter.units(), 0x4000);
//! assert!((StdTrig.sin(quarter) - 1.0).abs() < 1e-6);
//!
//! // A full turn wraps to zero.
//! assert_eq!(Angle::from_degrees(360.0), Angle::ZERO);
//! ```

use std::f32::consts::TAU;
use std::fmt;

/// Binary angle units per full turn.
pub const UNITS_PER_TURN: f32 = 65536.0;

/// A 16-bit wrapping binary angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle(pub i16);

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self(0);

    /// Converts degrees to a binary angle.
    ///
    /// The fractional part is truncated and the result wraps modulo one turn,
    /// so `360.0` maps to `0` and `180.0` maps to `-0x8000`.
    #[inline]
    pub fn from_degrees(deg: f32) -> Self {
        // Truncate through i32 first: a direct `as i16` would saturate.
        Self((deg * UNITS_PER_TURN / 360.0) as i32 as i16)
    }

    /// Raw angle units as an unsigned value in `0..0x10000`.
    #[inline]
    pub const fn units(self) -> u16 {
        self.0 as u16
    }

    /// Signed angle in degrees, in `[-180, 180)`.
    #[inline]
    pub fn to_degrees(self) -> f32 {
        self.0 as f32 * (360.0 / UNITS_PER_TURN)
    }

    /// Signed angle in radians, in `[-pi, pi)`.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0 as f32 * (TAU / UNITS_PER_TURN)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.units())
    }
}

/// Sine/cosine over binary angles.
///
/// Implementations must be pure: the same angle always yields the same value.
pub trait Trig {
    /// Sine of `angle`.
    fn sin(&self, angle: Angle) -> f32;

    /// Cosine of `angle`.
    fn cos(&self, angle: Angle) -> f32;

    /// Both at once. Override when a table lookup can share work.
    #[inline]
    fn sin_cos(&self, angle: Angle) -> (f32, f32) {
        (self.sin(angle), self.cos(angle))
    }
}

/// Floating-point [`Trig`] evaluating the exact binary angle.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTrig;

impl Trig for StdTrig {
    #[inline]
    fn sin(&self, angle: Angle) -> f32 {
        angle.to_radians().sin()
    }

    #[inline]
    fn cos(&self, angle: Angle) -> f32 {
        angle.to_radians().cos()
    }

    #[inline]
    fn sin_cos(&self, angle: Angle) -> (f32, f32) {
        angle.to_radians().sin_cos()
    }
}

impl<T: Trig + ?Sized> Trig for &T {
    #[inline]
    fn sin(&self, angle: Angle) -> f32 {
        (**self).sin(angle)
    }

    #[inline]
    fn cos(&self, angle: Angle) -> f32 {
        (**self).cos(angle)
    }

    #[inline]
    fn sin_cos(&self, angle: Angle) -> (f32, f32) {
        (**self).sin_cos(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_degrees_quadrants() {
        assert_eq!(Angle::from_degrees(0.0).units(), 0);
        assert_eq!(Angle::from_degrees(90.0).units(), 0x4000);
        assert_eq!(Angle::from_degrees(180.0).units(), 0x8000);
        assert_eq!(Angle::from_degrees(270.0).units(), 0xC000);
    }

    #[test]
    fn test_full_turn_wraps() {
        assert_eq!(Angle::from_degrees(360.0), Angle::ZERO);
        assert_eq!(Angle::from_degrees(720.0), Angle::ZERO);
        assert_eq!(Angle::from_degrees(-360.0), Angle::ZERO);
        assert_eq!(Angle::from_degrees(450.0), Angle::from_degrees(90.0));
    }

    #[test]
    fn test_negative_degrees() {
        assert_eq!(Angle::from_degrees(-90.0).units(), 0xC000);
        assert_abs_diff_eq!(Angle::from_degrees(-90.0).to_degrees(), -90.0);
    }

    #[test]
    fn test_truncates_fraction() {
        // 1 degree is 182.04 units
        assert_eq!(Angle::from_degrees(1.0).0, 182);
        assert_eq!(Angle::from_degrees(-1.0).0, -182);
    }

    #[test]
    fn test_std_trig() {
        let t = StdTrig;
        assert_eq!(t.sin(Angle::ZERO), 0.0);
        assert_eq!(t.cos(Angle::ZERO), 1.0);
        assert_abs_diff_eq!(t.sin(Angle::from_degrees(90.0)), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.cos(Angle::from_degrees(90.0)), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(t.cos(Angle::from_degrees(180.0)), -1.0, epsilon = 1e-6);

        let (s, c) = t.sin_cos(Angle::from_degrees(30.0));
        assert_abs_diff_eq!(s, 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(c, 0.866_025, epsilon = 1e-4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Angle::from_degrees(90.0).to_string(), "0x4000");
    }
}
