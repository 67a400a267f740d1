//! The 4×4 tile grid and its frame transforms.
//!
//! Cells hold `0` for empty or a power of two ≥ 2. The grid is owned
//! exclusively by the engine and mutated only through moves and spawns; this
//! module provides the raw table plus the reflection/transpose transforms the
//! engine composes to share one merge routine across all four directions.

use serde::{Deserialize, Serialize};

/// Side length of the (fixed) grid.
pub const GRID_SIZE: usize = 4;

/// A 4×4 table of tile values. `0` means empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid([[u32; GRID_SIZE]; GRID_SIZE]);

impl Grid {
    /// An empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from raw rows. Intended for tests and replay tooling.
    #[must_use]
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self(rows)
    }

    /// The raw rows.
    #[must_use]
    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.0
    }

    /// Value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row][col]
    }

    /// Set the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.0[row][col] = value;
    }

    /// Mutable access to a single row.
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32; GRID_SIZE] {
        &mut self.0[row]
    }

    /// Copy of a single row.
    #[must_use]
    pub fn row(&self, row: usize) -> [u32; GRID_SIZE] {
        self.0[row]
    }

    /// Transpose in place (rows become columns).
    pub fn transpose(&mut self) {
        for row in 0..GRID_SIZE {
            for col in (row + 1)..GRID_SIZE {
                let tmp = self.0[row][col];
                self.0[row][col] = self.0[col][row];
                self.0[col][row] = tmp;
            }
        }
    }

    /// Reverse every row in place (horizontal reflection).
    pub fn reverse_rows(&mut self) {
        for row in self.0.iter_mut() {
            row.reverse();
        }
    }

    /// Coordinates of all empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.0[row][col] == 0 {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// True if any cell is empty.
    #[must_use]
    pub fn has_empty_cells(&self) -> bool {
        self.0.iter().any(|row| row.iter().any(|&v| v == 0))
    }

    /// True if any two horizontally or vertically adjacent cells hold equal
    /// nonzero values.
    #[must_use]
    pub fn has_adjacent_matches(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE - 1 {
                if self.0[row][col] != 0 && self.0[row][col] == self.0[row][col + 1] {
                    return true;
                }
            }
        }
        for row in 0..GRID_SIZE - 1 {
            for col in 0..GRID_SIZE {
                if self.0[row][col] != 0 && self.0[row][col] == self.0[row + 1][col] {
                    return true;
                }
            }
        }
        false
    }

    /// Sum of all tile values. Useful for conservation checks.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.0.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// The largest tile on the grid (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Number of nonzero cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v != 0).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            for &cell in row {
                if cell == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{cell:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
