//! # Game Configuration
//!
//! Everything needed to set up a game: board size, dice and player modes,
//! animation speeds and the board layout. Configurations load from JSON and
//! are validated before a game starts.

use crate::board::{BoardLayout, BOARD_N};
use crate::game::{DiceMode, PlayerMode};
use crate::movement::SpeedProfile;
use crate::{SerpentineError, SerpentineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The only board size the layout tables are defined for.
pub const SUPPORTED_BOARD_SIZE: u8 = BOARD_N;

/// Default number of segments in a snake slide.
pub const DEFAULT_SNAKE_SEGMENTS: usize = 80;

/// Default number of rungs in a ladder climb.
pub const DEFAULT_LADDER_RUNGS: usize = 6;

/// Longest frame time a single tick may advance, in seconds.
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;

/// Full game configuration.
///
/// # Examples
///
/// ```
/// use serpentine::{DiceMode, GameConfig};
///
/// let config = GameConfig::default();
/// assert_eq!(config.board_size, 10);
/// assert_eq!(config.dice_mode, DiceMode::Single);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Squares along one side of the board
    pub board_size: u8,
    /// Dice thrown per roll at the start of a game
    pub dice_mode: DiceMode,
    /// Players taking turns
    pub player_mode: PlayerMode,
    /// Animation rates
    pub speeds: SpeedProfile,
    /// Path resolution of a snake slide
    pub snake_segments: usize,
    /// Path resolution of a ladder climb
    pub ladder_rungs: usize,
    /// Upper bound on the time a single tick advances
    pub max_frame_dt: f32,
    /// Snakes, ladders and bonus tiles
    pub layout: BoardLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DiceMode::Single, PlayerMode::Two)
    }
}

impl GameConfig {
    /// Creates a classic-board configuration with the given modes.
    pub fn new(dice_mode: DiceMode, player_mode: PlayerMode) -> Self {
        Self {
            board_size: SUPPORTED_BOARD_SIZE,
            dice_mode,
            player_mode,
            speeds: SpeedProfile::default(),
            snake_segments: DEFAULT_SNAKE_SEGMENTS,
            ladder_rungs: DEFAULT_LADDER_RUNGS,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            layout: BoardLayout::classic(),
        }
    }

    /// Replaces the board layout.
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> SerpentineResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> SerpentineResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> SerpentineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every parameter and the layout tables.
    pub fn validate(&self) -> SerpentineResult<()> {
        if self.board_size != SUPPORTED_BOARD_SIZE {
            return Err(SerpentineError::ConfigError(format!(
                "unsupported board size {}; only {} is supported",
                self.board_size, SUPPORTED_BOARD_SIZE
            )));
        }
        if !self.speeds.is_valid() {
            return Err(SerpentineError::ConfigError(format!(
                "animation speeds must be positive: {:?}",
                self.speeds
            )));
        }
        if self.snake_segments == 0 || self.ladder_rungs == 0 {
            return Err(SerpentineError::ConfigError(
                "snake segments and ladder rungs must be at least 1".to_string(),
            ));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(SerpentineError::ConfigError(format!(
                "max frame time must be positive, got {}",
                self.max_frame_dt
            )));
        }
        self.layout.validate()
    }
}
