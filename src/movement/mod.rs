//! # Movement Module
//!
//! Planning and animating token movement.
//!
//! Planning is pure: the same request always yields the same waypoints. The
//! animation engine owns the only "in motion" state in the game and commits
//! cells back to the moving token as it goes.

pub mod animation;
pub mod paths;

pub use animation::*;
pub use paths::*;
