//! The per-row compact-and-merge kernel.
//!
//! This is the one genuinely tricky algorithm in the crate, so it lives here
//! as a pure function over a single row, independent of grid, direction, and
//! session state. The engine applies it to every row after mapping the grid
//! into the left frame.
//!
//! ## Merge rules
//!
//! 1. Zeros are removed first; survivors compact left preserving order.
//! 2. One left-to-right scan: a cell equal to its right neighbor (both
//!    nonzero) doubles, the remainder shifts left, and the scan continues at
//!    the NEXT index. A merged cell is never re-merged in the same pass.
//!
//! Consequences: `[2,2,2,0]` yields `[4,2,0,0]` (one merge), `[2,2,2,2]`
//! yields `[4,4,0,0]` (two merges), and `[2,2,4,0]` yields `[4,4,0,0]`
//! without the two 4s combining.

use smallvec::SmallVec;

use crate::core::grid::GRID_SIZE;

/// A merge within a row: the (left-frame) index the pair collapsed into and
/// the doubled value.
pub type RowMergeRecord = (usize, u32);

/// Result of compacting and merging one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMerge {
    /// The row after compaction and merging.
    pub cells: [u32; GRID_SIZE],
    /// Total value of tiles created by merges in this row.
    pub score_delta: u64,
    /// Every merge, in scan order. At most two on a 4-cell row.
    pub merges: SmallVec<[RowMergeRecord; 2]>,
}

/// Compact a row leftward and merge equal adjacent pairs.
#[must_use]
pub fn merge_row(row: [u32; GRID_SIZE]) -> RowMerge {
    // Compact: drop zeros, keep order.
    let mut cells = [0u32; GRID_SIZE];
    let mut len = 0;
    for &value in &row {
        if value != 0 {
            cells[len] = value;
            len += 1;
        }
    }

    let mut score_delta = 0u64;
    let mut merges = SmallVec::new();

    for idx in 0..GRID_SIZE - 1 {
        if cells[idx] != 0 && cells[idx] == cells[idx + 1] {
            let merged = cells[idx] * 2;
            cells[idx] = merged;

            // Close the gap left by the consumed cell.
            for k in idx + 1..GRID_SIZE - 1 {
                cells[k] = cells[k + 1];
            }
            cells[GRID_SIZE - 1] = 0;

            score_delta += u64::from(merged);
            merges.push((idx, merged));
        }
    }

    RowMerge {
        cells,
        score_delta,
        merges,
    }
}
