//! Error types for affine-rs operations.
//!
//! The math routines are tight inner-loop code and validate almost nothing.
//! Only two conditions are treated as hard failures, and both mean the caller
//! handed in something no result can be computed for:
//!
//! - an axis identifier outside `{X, Y, Z}`
//! - a matrix whose determinant is too close to zero to invert
//!
//! Neither is retried or patched up with a default. The operation returns
//! [`Error`] and leaves its output untouched.
//!
//! A zero-length vector passed to normalize is *not* an error; it is
//! reported through a `bool` return instead.
//!
//! # Usage
//!
//! ```rust
//! use affine_core::{Error, Result};
//!
//! fn pick_row(row: usize) -> Result<usize> {
//!     if row > 2 {
//!         return Err(Error::row_out_of_range(row));
//!     }
//!     Ok(row)
//! }
//!
//! assert!(pick_row(3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by matrix construction and inversion.
///
/// # Categories
///
/// - **Input errors**: [`BadAxis`](Error::BadAxis), [`RowOutOfRange`](Error::RowOutOfRange)
/// - **Numeric errors**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Configuration errors**: [`InvalidTolerances`](Error::InvalidTolerances)
#[derive(Debug, Error)]
pub enum Error {
    /// Axis identifier is not one of X (0), Y (1) or Z (2).
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_core::Error;
    ///
    /// let err = Error::bad_axis(7);
    /// assert!(err.to_string().contains('7'));
    /// ```
    #[error("bad axis number {id}")]
    BadAxis {
        /// Identifier that was passed in
        id: i32,
    },

    /// Matrix determinant magnitude is below the singularity threshold.
    #[error("singular matrix, no inverse (determinant {determinant:e})")]
    SingularMatrix {
        /// Determinant that failed the threshold test
        determinant: f32,
    },

    /// Row index used as a rotation axis is not one of the three basis rows.
    #[error("row {row} is not a basis row (expected 0..=2)")]
    RowOutOfRange {
        /// Row that was requested
        row: usize,
    },

    /// Tolerance configuration failed validation.
    #[error("invalid tolerances: {0}")]
    InvalidTolerances(String),

    /// Tolerance configuration could not be parsed.
    #[cfg(feature = "serde")]
    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates an [`Error::BadAxis`] error.
    #[inline]
    pub fn bad_axis(id: i32) -> Self {
        Self::BadAxis { id }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::RowOutOfRange`] error.
    #[inline]
    pub fn row_out_of_range(row: usize) -> Self {
        Self::RowOutOfRange { row }
    }

    /// Creates an [`Error::InvalidTolerances`] error.
    #[inline]
    pub fn invalid_tolerances(msg: impl Into<String>) -> Self {
        Self::InvalidTolerances(msg.into())
    }

    /// Returns `true` if the caller passed an identifier that names nothing.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::BadAxis { .. } | Self::RowOutOfRange { .. })
    }

    /// Returns `true` if this is a singular-matrix error.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}
