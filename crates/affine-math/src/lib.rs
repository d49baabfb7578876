//! # affine-math
//!
//! Affine transform math for positioning cameras and animating objects.
//!
//! This crate provides:
//!
//! - [`Vec3`] - 3D vectors with dot/cross, normalize, clamp and 2D rotation
//! - [`Mat4`] - 4x4 affine matrices: compose, scale, translate, transform
//! - Look-at view matrices ([`Mat4::look_at`], [`Mat4::origin_look_at`])
//! - Rotations from axis/angle, coordinate axes, Euler sequences and
//!   quaternions ([`Axis`], [`Quat`])
//! - Determinants, adjugate and inversion by cofactor expansion
//!   ([`det4x4`], [`adjugate`], [`Mat4::inverse`])
//!
//! # Convention
//!
//! Matrices are stored **row-major** and transform **row vectors**:
//!
//! ```text
//! v' = v * M
//! ```
//!
//! The 3x3 block is the linear part, row 3 is the translation and column 3
//! stays `[0, 0, 0, 1]`. A product `a * b` applies `a` first. This is the
//! transpose of the column-vector layout used by most textbooks; the same
//! memory reinterpreted as column-major is the equivalent `glam::Mat4`.
//!
//! # Usage
//!
//! ```rust
//! use affine_math::{Axis, Mat4, Vec3};
//!
//! // Object transform: scale, spin, then place
//! let mut model = Mat4::IDENTITY;
//! model.scale_by_vec(Vec3::new(2.0, 2.0, 2.0));
//! model.rotate_about_axis(Axis::Y, 45.0);
//! model.add_translation(Vec3::new(0.0, 100.0, 0.0));
//!
//! // Camera
//! let view = Mat4::look_at(Vec3::new(0.0, 200.0, 1000.0), Vec3::ZERO, Vec3::Y);
//!
//! let world_to_camera = model * view;
//! let back = world_to_camera.inverse()?;
//! assert!((world_to_camera * back).abs_diff_eq(&Mat4::IDENTITY, 1e-3));
//! # Ok::<(), affine_math::Error>(())
//! ```
//!
//! # Errors
//!
//! Only inversion of a (near-)singular matrix and unknown axis or row
//! identifiers fail; they return [`affine_core::Error`]. Everything else
//! trusts its inputs and lets non-finite values propagate.
//!
//! # Dependencies
//!
//! - `affine-core` - Error type, binary angles, tolerances
//! - [`glam`] - Conversions for handing matrices to a renderer
//! - [`tracing`] - Diagnostics on rescaling and rejected input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod camera;
mod det;
mod mat4;
mod rotation;
mod vec3;

pub use det::*;
pub use mat4::*;
pub use rotation::*;
pub use vec3::*;

pub use affine_core::{Angle, Error, Result, StdTrig, Tolerances, Trig};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Vec3 as GlamVec3};
}
