//! Integration tests for affine-rs crates.
//!
//! These tests drive `affine-math` the way an animation driver does: build a
//! camera and object transforms per frame, compose and invert them, and load
//! tolerances from configuration through `affine-core`.
