//! # Serpentine
//!
//! A snakes-and-ladders engine for a 100-cell serpentine board with animated
//! token movement.
//!
//! ## Architecture Overview
//!
//! The core is a small frame-driven state machine that stays independent of
//! rendering:
//!
//! - **Board**: cell/grid/world coordinate mapping and the static link and
//!   bonus tables
//! - **Movement**: path planning for steps, snake slides and ladder climbs,
//!   plus the animation engine that advances a planned path over time
//! - **Game**: dice, game state and the turn controller that chains landing
//!   effects until the board is stable
//!
//! The `input`, `rendering` and `scenes` modules form a thin macroquad front
//! end. They read [`GameSnapshot`]s and issue commands into the
//! [`TurnController`]; they carry no game rules.

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod movement;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use board::*;
pub use config::GameConfig;
pub use game::*;
pub use input::*;
pub use movement::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for the Serpentine engine.
#[derive(thiserror::Error, Debug)]
pub enum SerpentineError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A command was issued in a state that forbids it
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Initialization parameters are malformed or unsupported
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The link and bonus tables contradict each other
    #[error("Configuration conflict: {0}")]
    ConfigurationConflict(String),
}

/// Result type used throughout the Serpentine codebase.
pub type SerpentineResult<T> = Result<T, SerpentineError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
