//! Numeric tolerances used by matrix inversion and look-at construction.
//!
//! The defaults suit world units where camera-to-target distances sit
//! between 10 and 10 000. Scenes at a very different scale should construct
//! [`Tolerances`] with values that fit them.
//!
//! # Usage
//!
//! ```rust
//! use affine_core::Tolerances;
//!
//! let tol = Tolerances::default();
//! assert_eq!(tol.singular_epsilon, 1e-5);
//!
//! let tight = Tolerances { singular_epsilon: 1e-8, ..Tolerances::default() };
//! assert!(tight.validate().is_ok());
//! ```
//!
//! With the `serde` feature, tolerances can be loaded from YAML; missing keys
//! fall back to the defaults:
//!
//! ```yaml
//! singular_epsilon: 1.0e-6
//! look_at_max_span: 50000.0
//! ```

use crate::{Error, Result};

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-5;

/// Lower bound of the look-at forward-vector L1 span before rescaling.
pub const LOOK_AT_MIN_SPAN: f32 = 10.0;

/// Upper bound of the look-at forward-vector L1 span, and the magnitude the
/// forward vector is rescaled to when it falls outside the band.
pub const LOOK_AT_MAX_SPAN: f32 = 10000.0;

/// Tunable thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Inversion fails when `|det| < singular_epsilon`.
    pub singular_epsilon: f32,
    /// Look-at rescales the forward vector when its L1 span is below this.
    pub look_at_min_span: f32,
    /// Look-at rescales the forward vector when its L1 span is above this.
    pub look_at_max_span: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            singular_epsilon: SINGULAR_EPSILON,
            look_at_min_span: LOOK_AT_MIN_SPAN,
            look_at_max_span: LOOK_AT_MAX_SPAN,
        }
    }
}

impl Tolerances {
    /// Checks that every threshold is positive and finite and that the
    /// look-at band is not inverted.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("singular_epsilon", self.singular_epsilon),
            ("look_at_min_span", self.look_at_min_span),
            ("look_at_max_span", self.look_at_max_span),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid_tolerances(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if self.look_at_min_span > self.look_at_max_span {
            return Err(Error::invalid_tolerances(format!(
                "look-at band is inverted: min {} > max {}",
                self.look_at_min_span, self.look_at_max_span
            )));
        }
        Ok(())
    }

    /// Returns `true` if an L1 span lies outside the look-at band.
    #[inline]
    pub fn needs_rescale(&self, span: f32) -> bool {
        span > self.look_at_max_span || span < self.look_at_min_span
    }

    /// Parses tolerances from YAML and validates them.
    #[cfg(feature = "serde")]
    pub fn from_yaml(src: &str) -> Result<Self> {
        let tol: Self = serde_yaml::from_str(src)?;
        tol.validate()?;
        tracing::debug!(?tol, "loaded tolerances");
        Ok(tol)
    }

    /// Serializes tolerances to YAML.
    #[cfg(feature = "serde")]
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
