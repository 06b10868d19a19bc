//! # Rendering Module
//!
//! Top-down macroquad view of the board, the tokens and the side panel.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
