//! Move directions.
//!
//! All four directions are evaluated by one shared left-merge routine: the grid
//! is mapped into the "left frame" (reflected and/or transposed so the move
//! reads as a leftward slide), merged, then mapped back. This module owns the
//! direction type and the coordinate mapping out of that working frame, so the
//! four directions can never drift out of sync.

use serde::{Deserialize, Serialize};

use super::grid::GRID_SIZE;

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the engine evaluates them in tests.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Map `(row, col)` from this direction's left-frame back to true grid
    /// coordinates.
    ///
    /// Merge events are produced while the grid sits in the working frame;
    /// this is the inverse of the frame transform applied before the merge.
    #[must_use]
    pub fn from_left_frame(self, row: usize, col: usize) -> (usize, usize) {
        let last = GRID_SIZE - 1;
        match self {
            Direction::Left => (row, col),
            Direction::Right => (row, last - col),
            Direction::Up => (col, row),
            Direction::Down => (last - col, row),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}
