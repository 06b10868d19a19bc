//! # Input Module
//!
//! Keyboard handling for the board game front end.

use macroquad::prelude::*;

/// Keys checked every frame, in priority order.
const BOUND_KEYS: [KeyCode; 7] = [
    KeyCode::Escape,
    KeyCode::Q,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::P,
    KeyCode::D,
    KeyCode::F1,
];

/// Player input types that can be processed by the scene loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Roll the dice for the current player
    Roll,
    /// Start a new game
    Restart,
    /// Switch between one and two players
    TogglePlayers,
    /// Switch between one and two dice
    ToggleDice,
    /// Show help information
    Help,
    /// Quit the game
    Quit,
}

/// Input handler for processing player commands.
///
/// Translates key presses into [`PlayerInput`]s; it never touches game
/// state itself.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Gets the input for a key pressed this frame, if any.
    pub fn get_input(&self) -> Option<PlayerInput> {
        BOUND_KEYS
            .iter()
            .find(|key| is_key_pressed(**key))
            .and_then(|key| Self::map_key(*key))
    }

    /// Maps a key to its input, if the key is bound.
    pub fn map_key(key: KeyCode) -> Option<PlayerInput> {
        match key {
            KeyCode::Escape | KeyCode::Q => Some(PlayerInput::Quit),
            KeyCode::Space => Some(PlayerInput::Roll),
            KeyCode::R => Some(PlayerInput::Restart),
            KeyCode::P => Some(PlayerInput::TogglePlayers),
            KeyCode::D => Some(PlayerInput::ToggleDice),
            KeyCode::F1 => Some(PlayerInput::Help),
            _ => None,
        }
    }
}
