//! # Coordinate Mapping
//!
//! Conversions between linear cell numbers, serpentine grid positions and
//! continuous board coordinates, plus the inverse lookup that snaps a board
//! coordinate back to the nearest cell.
//!
//! Row 0 holds cells 1-10 left to right, row 1 holds 11-20 right to left, and
//! so on, so consecutive cells are always adjacent squares.

use super::{Cell, BOARD_MIN, BOARD_N, FIRST_CELL, LAST_CELL, SQUARE_SIZE};
use crate::utils::lerp;
use serde::{Deserialize, Serialize};

/// A square on the board grid, both components in `0..BOARD_N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    /// Creates a new grid position.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A point in board space.
///
/// `x` and `z` span the board plane; `y` is height above the board surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    /// Creates a new point.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to `other` in the board plane, ignoring height.
    pub fn planar_distance_sq(self, other: WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    /// Linearly interpolates every component towards `other`.
    pub fn lerp(self, other: WorldPoint, t: f32) -> WorldPoint {
        WorldPoint::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }
}

/// Converts a cell number to its grid position.
///
/// Out-of-range input is clamped onto the board first.
///
/// # Examples
///
/// ```
/// use serpentine::{cell_to_grid, GridPos};
///
/// assert_eq!(cell_to_grid(1), GridPos::new(0, 0));
/// assert_eq!(cell_to_grid(11), GridPos::new(1, 9));
/// assert_eq!(cell_to_grid(250), GridPos::new(9, 0));
/// ```
pub fn cell_to_grid(n: impl Into<i32>) -> GridPos {
    let n = n
        .into()
        .clamp(i32::from(FIRST_CELL), i32::from(LAST_CELL));
    let n0 = (n - 1) as u8;
    let row = n0 / BOARD_N;
    let mut col = n0 % BOARD_N;
    if row % 2 == 1 {
        col = BOARD_N - 1 - col;
    }
    GridPos::new(row, col)
}

/// Inverse of [`cell_to_grid`].
pub fn grid_to_cell(grid: GridPos) -> Cell {
    let col = if grid.row % 2 == 1 {
        BOARD_N - 1 - grid.col
    } else {
        grid.col
    };
    grid.row * BOARD_N + col + 1
}

/// Returns the centre of a grid square on the board surface.
pub fn grid_to_world(grid: GridPos) -> WorldPoint {
    let x = BOARD_MIN + (f32::from(grid.col) + 0.5) * SQUARE_SIZE;
    let z = BOARD_MIN + (f32::from(grid.row) + 0.5) * SQUARE_SIZE;
    WorldPoint::new(x, 0.0, z)
}

/// Returns the centre of a cell on the board surface.
pub fn cell_to_world(n: impl Into<i32>) -> WorldPoint {
    grid_to_world(cell_to_grid(n))
}

/// Reference nearest-cell search: scans every cell in ascending order and
/// keeps the first one with the smallest planar distance.
///
/// [`CellLookup::nearest_cell`] answers the same question without the scan.
pub fn nearest_cell_scan(point: WorldPoint) -> Cell {
    let mut best = FIRST_CELL;
    let mut best_distance = f32::INFINITY;
    for cell in FIRST_CELL..=LAST_CELL {
        let distance = cell_to_world(cell).planar_distance_sq(point);
        if distance < best_distance {
            best_distance = distance;
            best = cell;
        }
    }
    best
}

/// Precomputed inverse of the coordinate mapping.
///
/// Cell centres sit on a regular grid, so the nearest centre along each axis
/// is one of the two grid lines bracketing the point. The lookup quantizes
/// each axis to those candidates and only compares at most four cells, with
/// ties going to the lowest cell number as in [`nearest_cell_scan`].
#[derive(Debug, Clone)]
pub struct CellLookup {
    by_grid: [[Cell; BOARD_N as usize]; BOARD_N as usize],
}

impl Default for CellLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl CellLookup {
    /// Builds the grid-to-cell table.
    pub fn new() -> Self {
        let mut by_grid = [[FIRST_CELL; BOARD_N as usize]; BOARD_N as usize];
        for cell in FIRST_CELL..=LAST_CELL {
            let grid = cell_to_grid(cell);
            by_grid[grid.row as usize][grid.col as usize] = cell;
        }
        Self { by_grid }
    }

    /// Returns the cell at a grid position.
    pub fn cell_at(&self, grid: GridPos) -> Cell {
        self.by_grid[grid.row as usize][grid.col as usize]
    }

    /// Snaps a board coordinate to the cell whose centre is closest in the
    /// board plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpentine::{cell_to_world, CellLookup};
    ///
    /// let lookup = CellLookup::new();
    /// assert_eq!(lookup.nearest_cell(cell_to_world(42)), 42);
    /// ```
    pub fn nearest_cell(&self, point: WorldPoint) -> Cell {
        let rows = axis_candidates(point.z);
        let cols = axis_candidates(point.x);

        let mut best = LAST_CELL;
        let mut best_distance = f32::INFINITY;
        for &row in rows.iter().flatten() {
            for &col in cols.iter().flatten() {
                let cell = self.cell_at(GridPos::new(row, col));
                let distance = grid_to_world(GridPos::new(row, col)).planar_distance_sq(point);
                if distance < best_distance || (distance == best_distance && cell < best) {
                    best_distance = distance;
                    best = cell;
                }
            }
        }
        best
    }
}

/// Returns the one or two grid indices whose centres bracket `v`.
fn axis_candidates(v: f32) -> [Option<u8>; 2] {
    let last = f32::from(BOARD_N - 1);
    let index = ((v - BOARD_MIN) / SQUARE_SIZE - 0.5).clamp(0.0, last);
    if index.is_nan() {
        return [Some(0), None];
    }
    let lo = index.floor() as u8;
    let hi = (lo < BOARD_N - 1).then_some(lo + 1);
    [Some(lo), hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serpentine_rows() {
        assert_eq!(cell_to_grid(10), GridPos::new(0, 9));
        assert_eq!(cell_to_grid(11), GridPos::new(1, 9));
        assert_eq!(cell_to_grid(20), GridPos::new(1, 0));
        assert_eq!(cell_to_grid(21), GridPos::new(2, 0));
        assert_eq!(cell_to_grid(100), GridPos::new(9, 0));
    }

    #[test]
    fn test_cell_to_grid_clamps() {
        assert_eq!(cell_to_grid(0), cell_to_grid(1));
        assert_eq!(cell_to_grid(-17), cell_to_grid(1));
        assert_eq!(cell_to_grid(101), cell_to_grid(100));
    }

    #[test]
    fn test_grid_inverse_is_bijective() {
        let mut seen = std::collections::HashSet::new();
        for cell in FIRST_CELL..=LAST_CELL {
            let grid = cell_to_grid(cell);
            assert!(seen.insert(grid), "cell {} reuses grid {:?}", cell, grid);
            assert_eq!(grid_to_cell(grid), cell);
        }
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_consecutive_cells_are_adjacent() {
        for cell in FIRST_CELL..LAST_CELL {
            let a = cell_to_world(cell);
            let b = cell_to_world(cell + 1);
            assert!((a.planar_distance_sq(b) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_world_corners() {
        assert_eq!(cell_to_world(1), WorldPoint::new(-4.5, 0.0, -4.5));
        assert_eq!(cell_to_world(10), WorldPoint::new(4.5, 0.0, -4.5));
        assert_eq!(cell_to_world(100), WorldPoint::new(-4.5, 0.0, 4.5));
    }

    #[test]
    fn test_lookup_round_trip() {
        let lookup = CellLookup::new();
        for cell in FIRST_CELL..=LAST_CELL {
            assert_eq!(lookup.nearest_cell(cell_to_world(cell)), cell);
            assert_eq!(nearest_cell_scan(cell_to_world(cell)), cell);
        }
    }

    #[test]
    fn test_lookup_tie_prefers_lowest_cell() {
        let lookup = CellLookup::new();
        // Midway between cells 1 and 2.
        let point = WorldPoint::new(-4.0, 0.0, -4.5);
        assert_eq!(lookup.nearest_cell(point), 1);
        assert_eq!(nearest_cell_scan(point), 1);
        // Midway between cells 19 and 20 on a reversed row.
        let point = WorldPoint::new(-4.0, 0.0, -3.5);
        assert_eq!(lookup.nearest_cell(point), 19);
        assert_eq!(nearest_cell_scan(point), 19);
    }

    #[test]
    fn test_lookup_outside_board_clamps_to_edge() {
        let lookup = CellLookup::new();
        assert_eq!(lookup.nearest_cell(WorldPoint::new(-50.0, 3.0, -50.0)), 1);
        assert_eq!(lookup.nearest_cell(WorldPoint::new(50.0, 0.0, 50.0)), 91);
    }
}
