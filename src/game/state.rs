//! # Game State Module
//!
//! The single authoritative aggregate for a game in progress: players,
//! whose turn it is, and whether someone has won.
//!
//! Only the turn controller and the animation engine it drives mutate this
//! state. Presentation code reads it through [`GameSnapshot`].

use super::{DiceMode, GameEvent, RollResult};
use crate::board::{Cell, WorldPoint, FIRST_CELL};
use crate::movement::AnimationMode;
use crate::{SerpentineError, SerpentineResult};
use serde::{Deserialize, Serialize};

/// Number of player records kept for the lifetime of a game.
pub const MAX_PLAYERS: usize = 2;

/// How many players take turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerMode {
    Single,
    #[default]
    Two,
}

impl PlayerMode {
    /// Maps a numeric player count onto a mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpentine::PlayerMode;
    ///
    /// assert_eq!(PlayerMode::from_count(2).unwrap(), PlayerMode::Two);
    /// assert!(PlayerMode::from_count(3).is_err());
    /// ```
    pub fn from_count(count: usize) -> SerpentineResult<Self> {
        match count {
            1 => Ok(PlayerMode::Single),
            2 => Ok(PlayerMode::Two),
            other => Err(SerpentineError::ConfigError(format!(
                "unsupported player count {}; expected 1 or 2",
                other
            ))),
        }
    }

    /// Number of players taking turns.
    pub fn count(self) -> usize {
        match self {
            PlayerMode::Single => 1,
            PlayerMode::Two => 2,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            PlayerMode::Single => PlayerMode::Two,
            PlayerMode::Two => PlayerMode::Single,
        }
    }
}

/// One player's token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Index into the turn order
    pub index: usize,
    /// Current cell, always in `1..=100`
    pub position: Cell,
    /// Set when this player must sit out their next turn
    pub skip_next_turn: bool,
}

impl Player {
    /// Creates a player on the starting cell.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            position: FIRST_CELL,
            skip_next_turn: false,
        }
    }
}

/// Authoritative state of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Both player records; only the first `player_mode.count()` take turns
    pub players: Vec<Player>,
    /// Index of the player whose turn it is
    pub current_player: usize,
    /// Set once a player reaches the last cell
    pub game_over: bool,
    /// The player who reached the last cell
    pub winner: Option<usize>,
    /// Dice thrown per roll
    pub dice_mode: DiceMode,
    /// Players taking turns
    pub player_mode: PlayerMode,
    /// The most recent roll, for display
    pub last_roll: Option<RollResult>,
}

impl GameState {
    /// Creates a fresh game with every player on the first cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpentine::{DiceMode, GameState, PlayerMode};
    ///
    /// let state = GameState::new(DiceMode::Single, PlayerMode::Two);
    /// assert_eq!(state.current_player, 0);
    /// assert!(state.players.iter().all(|p| p.position == 1));
    /// ```
    pub fn new(dice_mode: DiceMode, player_mode: PlayerMode) -> Self {
        Self {
            players: (0..MAX_PLAYERS).map(Player::new).collect(),
            current_player: 0,
            game_over: false,
            winner: None,
            dice_mode,
            player_mode,
            last_roll: None,
        }
    }

    /// Players currently taking turns.
    pub fn active_players(&self) -> &[Player] {
        &self.players[..self.player_mode.count()]
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Index of the player after the current one in turn order.
    pub fn next_player_index(&self) -> usize {
        (self.current_player + 1) % self.player_mode.count()
    }

    /// Ends the current player's turn.
    ///
    /// In two-player mode the turn passes on; a player flagged to skip is
    /// passed over once and their flag cleared. In single-player mode the
    /// current player keeps the turn.
    pub fn advance_turn(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.player_mode == PlayerMode::Two {
            self.current_player = self.next_player_index();
            let skipped = &mut self.players[self.current_player];
            if skipped.skip_next_turn {
                skipped.skip_next_turn = false;
                events.push(GameEvent::TurnSkipped {
                    player: skipped.index,
                });
                self.current_player = self.next_player_index();
            }
        }

        events.push(GameEvent::TurnEnded {
            next: self.current_player,
        });
        events
    }

    /// Switches between one and two players.
    ///
    /// Dropping to one player hands the turn back to player 0 and clears
    /// pending skips. Player 2 keeps their position for when they rejoin.
    pub fn set_player_mode(&mut self, mode: PlayerMode) {
        self.player_mode = mode;
        if mode == PlayerMode::Single {
            self.current_player = 0;
            for player in &mut self.players {
                player.skip_next_turn = false;
            }
        }
    }
}

/// The moving token as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationView {
    pub mode: AnimationMode,
    pub player: usize,
    pub render_position: WorldPoint,
}

/// Read-only view of a game for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Players taking turns, in turn order
    pub players: Vec<Player>,
    pub current_player: usize,
    pub game_over: bool,
    pub winner: Option<usize>,
    pub dice_mode: DiceMode,
    pub player_mode: PlayerMode,
    pub last_roll: Option<RollResult>,
    /// Present while a token is in motion
    pub animation: Option<AnimationView>,
}

impl GameSnapshot {
    /// Returns true while a move is being animated or resolved.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}
