//! # affine-core
//!
//! Core types shared by the affine-rs crates.
//!
//! This crate provides the pieces the math layer needs but does not own:
//!
//! - [`Error`], [`Result`] - Failure outcomes for axis lookup and inversion
//! - [`Angle`] - 16-bit wrapping binary angle, converted from degrees
//! - [`Trig`], [`StdTrig`] - The sine/cosine seam over binary angles
//! - [`Tolerances`] - Singularity threshold and look-at rescaling band
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies:
//!
//! ```text
//! affine-core (this crate)
//!    ^
//!    |
//!    +-- affine-math (vectors, matrices, inversion, cameras)
//!    +-- affine-tests (integration scenarios)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`Angle`] and [`Tolerances`], plus
//!   [`Tolerances::from_yaml`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod angle;
pub mod config;
pub mod error;

pub use angle::*;
pub use config::*;
pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use affine_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::angle::{Angle, StdTrig, Trig};
    pub use crate::config::Tolerances;
    pub use crate::error::{Error, Result};
}
