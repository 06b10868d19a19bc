//! # Utilities Module
//!
//! Interpolation helpers shared by path planning and rendering.

pub mod math;

pub use math::*;
