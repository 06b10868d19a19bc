//! # Game Module
//!
//! Turn-based rules on top of the board and movement layers.
//!
//! This module contains:
//! - Dice and their injectable face sources
//! - The authoritative game state and its read-only snapshot
//! - The turn controller that accepts rolls, drives animations and resolves
//!   landing effects
//! - The events reported back to the presentation layer each tick

pub mod dice;
pub mod state;
pub mod turn;

pub use dice::*;
pub use state::*;
pub use turn::*;

use crate::board::{BonusKind, Cell, LinkKind};
use serde::{Deserialize, Serialize};

/// Discrete things that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A token moved one square
    SegmentAdvanced { player: usize, from: Cell, to: Cell },
    /// A token landed on a snake head or ladder base
    LinkTriggered {
        player: usize,
        kind: LinkKind,
        source: Cell,
        destination: Cell,
    },
    /// A token came to rest on a bonus tile
    BonusTriggered {
        player: usize,
        cell: Cell,
        kind: BonusKind,
    },
    /// A flagged player was passed over
    TurnSkipped { player: usize },
    /// The turn passed to `next` (which may be the same player)
    TurnEnded { next: usize },
    /// A player reached the last cell
    GameWon { player: usize },
}

impl GameEvent {
    /// Human-readable description for message logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpentine::GameEvent;
    ///
    /// let event = GameEvent::GameWon { player: 1 };
    /// assert_eq!(event.describe(), "Player 2 wins!");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            GameEvent::SegmentAdvanced { player, to, .. } => {
                format!("Player {} moves to {}", player + 1, to)
            }
            GameEvent::LinkTriggered {
                player,
                kind: LinkKind::Snake,
                source,
                destination,
            } => format!(
                "Player {} hits the snake at {} and slides to {}",
                player + 1,
                source,
                destination
            ),
            GameEvent::LinkTriggered {
                player,
                kind: LinkKind::Ladder,
                source,
                destination,
            } => format!(
                "Player {} climbs the ladder at {} to {}",
                player + 1,
                source,
                destination
            ),
            GameEvent::BonusTriggered { player, kind, .. } => match kind {
                BonusKind::ExtraRoll => format!("Player {} rolls again", player + 1),
                BonusKind::SkipTurn => {
                    format!("Player {} makes the next player skip a turn", player + 1)
                }
                BonusKind::ForwardBy(n) => {
                    format!("Player {} moves forward {} more", player + 1, n)
                }
            },
            GameEvent::TurnSkipped { player } => format!("Player {} skips this turn", player + 1),
            GameEvent::TurnEnded { next } => format!("Player {} to roll", next + 1),
            GameEvent::GameWon { player } => format!("Player {} wins!", player + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_one_based_players() {
        let event = GameEvent::TurnEnded { next: 0 };
        assert_eq!(event.describe(), "Player 1 to roll");
    }

    #[test]
    fn test_describe_links() {
        let snake = GameEvent::LinkTriggered {
            player: 0,
            kind: LinkKind::Snake,
            source: 16,
            destination: 6,
        };
        assert_eq!(
            snake.describe(),
            "Player 1 hits the snake at 16 and slides to 6"
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::BonusTriggered {
            player: 1,
            cell: 5,
            kind: BonusKind::ExtraRoll,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
