//! # Board Module
//!
//! The static description of the board: how linear cell numbers map onto the
//! serpentine grid and into board space, and which cells carry snakes,
//! ladders or bonus effects.

pub mod coords;
pub mod layout;

pub use coords::*;
pub use layout::*;

/// A linear board cell index, `1..=100`.
pub type Cell = u8;

/// Number of squares along one side of the board.
pub const BOARD_N: u8 = 10;

/// The starting cell.
pub const FIRST_CELL: Cell = 1;

/// The winning cell.
pub const LAST_CELL: Cell = BOARD_N * BOARD_N;

/// Edge length of one board square in world units.
pub const SQUARE_SIZE: f32 = 1.0;

/// World coordinate of the board's lower edge on both planar axes.
pub const BOARD_MIN: f32 = -(BOARD_N as f32 * SQUARE_SIZE) / 2.0;

/// World coordinate of the board's upper edge on both planar axes.
pub const BOARD_MAX: f32 = (BOARD_N as f32 * SQUARE_SIZE) / 2.0;

/// Clamps an arbitrary integer onto the board.
///
/// # Examples
///
/// ```
/// use serpentine::clamp_cell;
///
/// assert_eq!(clamp_cell(-4), 1);
/// assert_eq!(clamp_cell(57), 57);
/// assert_eq!(clamp_cell(103), 100);
/// ```
pub fn clamp_cell(n: i32) -> Cell {
    n.clamp(i32::from(FIRST_CELL), i32::from(LAST_CELL)) as Cell
}

/// Returns true if `n` names a cell on the board.
pub fn is_on_board(n: Cell) -> bool {
    (FIRST_CELL..=LAST_CELL).contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_bounds() {
        assert_eq!(LAST_CELL, 100);
        assert_eq!(BOARD_MIN, -5.0);
        assert_eq!(BOARD_MAX, 5.0);
    }

    #[test]
    fn test_clamp_cell_overshoot() {
        assert_eq!(clamp_cell(97 + 5), 100);
        assert_eq!(clamp_cell(0), 1);
    }

    #[test]
    fn test_is_on_board() {
        assert!(!is_on_board(0));
        assert!(is_on_board(1));
        assert!(is_on_board(100));
        assert!(!is_on_board(101));
    }
}
