//! Grid transition engine: slide, merge, spawn, terminal detection.
//!
//! `row` holds the pure per-row kernel; `engine` composes it with frame
//! transforms, the spawn policy, and the terminal check.

pub mod engine;
pub mod row;

pub use engine::{EngineError, GridEngine, MergeEvent, MoveReport, SpawnedTile, WIN_TILE};
pub use row::{merge_row, RowMerge};
