//! # Board Layout
//!
//! Static configuration of snakes, ladders and bonus tiles, with load-time
//! validation.

use super::{clamp_cell, is_on_board, Cell, FIRST_CELL, LAST_CELL};
use crate::{SerpentineError, SerpentineResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which way a special link moves a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Head to tail, always downwards
    Snake,
    /// Base to top, always upwards
    Ladder,
}

/// A snake or ladder connecting two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialLink {
    pub source: Cell,
    pub destination: Cell,
    pub kind: LinkKind,
}

impl SpecialLink {
    /// Creates a snake from `head` down to `tail`.
    pub fn snake(head: Cell, tail: Cell) -> Self {
        Self {
            source: head,
            destination: tail,
            kind: LinkKind::Snake,
        }
    }

    /// Creates a ladder from `base` up to `top`.
    pub fn ladder(base: Cell, top: Cell) -> Self {
        Self {
            source: base,
            destination: top,
            kind: LinkKind::Ladder,
        }
    }

    /// Returns true if the destination lies on the side the kind requires.
    pub fn has_valid_direction(&self) -> bool {
        match self.kind {
            LinkKind::Snake => self.destination < self.source,
            LinkKind::Ladder => self.destination > self.source,
        }
    }
}

/// Side effect applied when a token comes to rest on a bonus tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// The same player rolls again
    ExtraRoll,
    /// The next player loses their next turn
    SkipTurn,
    /// The token advances a further number of squares
    ForwardBy(u8),
}

/// A bonus effect attached to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusTile {
    pub cell: Cell,
    pub kind: BonusKind,
}

impl BonusTile {
    /// Creates a new bonus tile.
    pub fn new(cell: Cell, kind: BonusKind) -> Self {
        Self { cell, kind }
    }
}

/// End point of a static movement chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    /// Cell where no further link or forward bonus applies
    pub cell: Cell,
    /// Number of links and forward bonuses followed to get there
    pub hops: usize,
}

/// The full set of special cells on a board.
///
/// # Examples
///
/// ```
/// use serpentine::{BoardLayout, LinkKind};
///
/// let layout = BoardLayout::classic();
/// layout.validate().unwrap();
/// let snake = layout.link_at(16).unwrap();
/// assert_eq!(snake.kind, LinkKind::Snake);
/// assert_eq!(snake.destination, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub links: Vec<SpecialLink>,
    #[serde(default)]
    pub bonuses: Vec<BonusTile>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::classic()
    }
}

impl BoardLayout {
    /// Creates a layout from explicit tables without validating it.
    pub fn new(links: Vec<SpecialLink>, bonuses: Vec<BonusTile>) -> Self {
        Self { links, bonuses }
    }

    /// A board with no special cells.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// The classic ten-snake, ten-ladder board with its six bonus tiles.
    pub fn classic() -> Self {
        let ladders = [
            (2, 38),
            (7, 14),
            (8, 31),
            (15, 26),
            (21, 42),
            (28, 84),
            (36, 44),
            (51, 67),
            (71, 91),
            (78, 98),
        ];
        let snakes = [
            (16, 6),
            (46, 25),
            (49, 11),
            (62, 19),
            (64, 60),
            (74, 53),
            (89, 68),
            (92, 88),
            (95, 75),
            (99, 80),
        ];

        let links = ladders
            .iter()
            .map(|&(base, top)| SpecialLink::ladder(base, top))
            .chain(snakes.iter().map(|&(head, tail)| SpecialLink::snake(head, tail)))
            .collect();

        let bonuses = vec![
            BonusTile::new(5, BonusKind::ExtraRoll),
            BonusTile::new(12, BonusKind::SkipTurn),
            BonusTile::new(27, BonusKind::ExtraRoll),
            BonusTile::new(44, BonusKind::SkipTurn),
            BonusTile::new(58, BonusKind::SkipTurn),
            BonusTile::new(82, BonusKind::ExtraRoll),
        ];

        Self::new(links, bonuses)
    }

    /// Returns the link whose source is `cell`, if any.
    pub fn link_at(&self, cell: Cell) -> Option<&SpecialLink> {
        self.links.iter().find(|link| link.source == cell)
    }

    /// Returns the bonus effect on `cell`, if any.
    pub fn bonus_at(&self, cell: Cell) -> Option<BonusKind> {
        self.bonuses
            .iter()
            .find(|bonus| bonus.cell == cell)
            .map(|bonus| bonus.kind)
    }

    /// Iterates over the links of one kind.
    pub fn links_of_kind(&self, kind: LinkKind) -> impl Iterator<Item = &SpecialLink> {
        self.links.iter().filter(move |link| link.kind == kind)
    }

    /// Upper bound on how many effects a single move can chain through.
    pub fn max_chain_length(&self) -> usize {
        self.links.len() + self.bonuses.len() + 1
    }

    /// Follows links and forward bonuses from `cell` until none applies.
    ///
    /// Fails with `ConfigurationConflict` if the chain revisits a cell.
    pub fn settle(&self, cell: Cell) -> SerpentineResult<Settled> {
        let mut visited = HashSet::new();
        let mut current = cell;
        let mut hops = 0;

        loop {
            if !visited.insert(current) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "moving from cell {} loops back through cell {}",
                    cell, current
                )));
            }

            if let Some(link) = self.link_at(current) {
                current = link.destination;
            } else if let Some(BonusKind::ForwardBy(n)) = self.bonus_at(current) {
                current = clamp_cell(i32::from(current) + i32::from(n));
            } else {
                return Ok(Settled {
                    cell: current,
                    hops,
                });
            }
            hops += 1;
        }
    }

    /// Checks the tables for contradictions.
    ///
    /// Every link must stay on the board and point the way its kind
    /// requires, no cell may be the source of two links, carry two bonuses
    /// or be both a link source and a bonus tile, and no chain of links and
    /// forward bonuses may loop.
    pub fn validate(&self) -> SerpentineResult<()> {
        let mut sources = HashSet::new();
        for link in &self.links {
            if !is_on_board(link.source) || !is_on_board(link.destination) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "{:?} {} -> {} leaves the board",
                    link.kind, link.source, link.destination
                )));
            }
            if !link.has_valid_direction() {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "{:?} {} -> {} points the wrong way",
                    link.kind, link.source, link.destination
                )));
            }
            if !sources.insert(link.source) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "cell {} is the source of more than one link",
                    link.source
                )));
            }
        }

        let mut bonus_cells = HashSet::new();
        for bonus in &self.bonuses {
            if !is_on_board(bonus.cell) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "bonus tile {} is off the board",
                    bonus.cell
                )));
            }
            if bonus.cell == LAST_CELL {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "bonus tile {} sits on the winning cell",
                    bonus.cell
                )));
            }
            if bonus.kind == BonusKind::ForwardBy(0) {
                return Err(SerpentineError::ConfigError(format!(
                    "bonus tile {} moves forward by zero squares",
                    bonus.cell
                )));
            }
            if sources.contains(&bonus.cell) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "cell {} is both a link source and a bonus tile",
                    bonus.cell
                )));
            }
            if !bonus_cells.insert(bonus.cell) {
                return Err(SerpentineError::ConfigurationConflict(format!(
                    "cell {} carries more than one bonus",
                    bonus.cell
                )));
            }
        }

        for cell in FIRST_CELL..=LAST_CELL {
            self.settle(cell)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout_is_valid() {
        let layout = BoardLayout::classic();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.links_of_kind(LinkKind::Snake).count(), 10);
        assert_eq!(layout.links_of_kind(LinkKind::Ladder).count(), 10);
        assert_eq!(layout.bonuses.len(), 6);
    }

    #[test]
    fn test_classic_link_directions() {
        for link in &BoardLayout::classic().links {
            assert!(link.has_valid_direction(), "{:?}", link);
        }
    }

    #[test]
    fn test_lookup_by_cell() {
        let layout = BoardLayout::classic();
        assert_eq!(layout.link_at(7), Some(&SpecialLink::ladder(7, 14)));
        assert_eq!(layout.link_at(6), None);
        assert_eq!(layout.bonus_at(12), Some(BonusKind::SkipTurn));
        assert_eq!(layout.bonus_at(13), None);
    }

    #[test]
    fn test_wrong_direction_is_conflict() {
        let layout = BoardLayout::new(vec![SpecialLink::snake(10, 40)], Vec::new());
        assert!(matches!(
            layout.validate(),
            Err(SerpentineError::ConfigurationConflict(_))
        ));
    }

    #[test]
    fn test_link_and_bonus_on_same_cell_is_conflict() {
        let layout = BoardLayout::new(
            vec![SpecialLink::ladder(10, 40)],
            vec![BonusTile::new(10, BonusKind::ExtraRoll)],
        );
        assert!(matches!(
            layout.validate(),
            Err(SerpentineError::ConfigurationConflict(_))
        ));
    }

    #[test]
    fn test_duplicate_source_is_conflict() {
        let layout = BoardLayout::new(
            vec![SpecialLink::ladder(10, 40), SpecialLink::snake(10, 3)],
            Vec::new(),
        );
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_off_board_link_is_conflict() {
        let layout = BoardLayout::new(vec![SpecialLink::ladder(90, 120)], Vec::new());
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_link_cycle_is_conflict() {
        let layout = BoardLayout::new(
            vec![SpecialLink::ladder(2, 38), SpecialLink::snake(38, 2)],
            Vec::new(),
        );
        assert!(matches!(
            layout.validate(),
            Err(SerpentineError::ConfigurationConflict(_))
        ));
    }

    #[test]
    fn test_forward_bonus_cycle_is_conflict() {
        let layout = BoardLayout::new(
            vec![SpecialLink::snake(13, 10)],
            vec![BonusTile::new(10, BonusKind::ForwardBy(3))],
        );
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_forward_on_last_cell_is_conflict() {
        let layout = BoardLayout::new(Vec::new(), vec![BonusTile::new(100, BonusKind::ForwardBy(2))]);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_bonus_on_last_cell_is_conflict() {
        for kind in [BonusKind::ExtraRoll, BonusKind::SkipTurn] {
            let layout = BoardLayout::new(Vec::new(), vec![BonusTile::new(LAST_CELL, kind)]);
            assert!(matches!(
                layout.validate(),
                Err(SerpentineError::ConfigurationConflict(_))
            ));
        }
    }

    #[test]
    fn test_forward_by_zero_is_config_error() {
        let layout = BoardLayout::new(Vec::new(), vec![BonusTile::new(30, BonusKind::ForwardBy(0))]);
        assert!(matches!(
            layout.validate(),
            Err(SerpentineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_settle_follows_chains() {
        let layout = BoardLayout::new(
            vec![SpecialLink::ladder(3, 20), SpecialLink::snake(25, 9)],
            vec![BonusTile::new(20, BonusKind::ForwardBy(5))],
        );
        layout.validate().unwrap();
        assert_eq!(layout.settle(3).unwrap(), Settled { cell: 9, hops: 3 });
        assert_eq!(layout.settle(4).unwrap(), Settled { cell: 4, hops: 0 });
    }

    #[test]
    fn test_settle_on_classic_board_terminates() {
        let layout = BoardLayout::classic();
        for cell in FIRST_CELL..=LAST_CELL {
            let settled = layout.settle(cell).unwrap();
            assert!(settled.hops <= layout.links.len());
            assert!(layout.link_at(settled.cell).is_none());
        }
    }
}
