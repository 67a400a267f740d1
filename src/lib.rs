//! # twenty48-engine
//!
//! A deterministic 2048 grid transition engine with a session wrapper for
//! UI hosts.
//!
//! ## Design Principles
//!
//! 1. **One merge routine**: All four directions map to a leftward slide via
//!    reflection/transposition, so they can never drift out of sync.
//!
//! 2. **Pure kernel**: The compact-and-merge algorithm is a pure function
//!    over a single row, testable without grid or UI context.
//!
//! 3. **Seeded determinism**: All randomness flows through one forkable,
//!    serializable RNG. Same seed, same game.
//!
//! 4. **Presentation stays outside**: The session exposes a read-only
//!    snapshot; rendering, input polling, and frame timing live in the host.
//!
//! ## Architecture
//!
//! - A move runs compact → merge → (if the grid changed) spawn → terminal
//!   evaluation, atomically. A no-op move consumes no randomness.
//!
//! - `won` latches on the first 2048 merge; play continues past it once the
//!   player acknowledges. `game_over` is evaluated on the post-spawn grid.
//!
//! - Merge events are produced fresh each move in true grid coordinates and
//!   consumed once by the cosmetic layer.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, RNG
//! - `engine`: Row kernel, grid engine, spawn policy, terminal detection
//! - `session`: Lifecycle, input gating, renderer snapshot
//! - `effects`: Board layout, color theme, merge twinkles (cosmetic only)
//!
//! ## Quick start
//!
//! ```
//! use twenty48_engine::{Direction, GameSession, MoveOutcome};
//!
//! let mut session = GameSession::seeded(42);
//!
//! match session.apply_move(Direction::Left) {
//!     MoveOutcome::Moved => {
//!         let snapshot = session.snapshot();
//!         assert_eq!(snapshot.grid.tile_count(), session.grid().tile_count());
//!     }
//!     MoveOutcome::Unchanged | MoveOutcome::Frozen => {}
//! }
//! ```

pub mod core;
pub mod effects;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Direction, GameRng, GameRngState, Grid, GRID_SIZE};

pub use crate::engine::{
    merge_row, EngineError, GridEngine, MergeEvent, MoveReport, RowMerge, SpawnedTile, WIN_TILE,
};

pub use crate::session::{GameSession, Intent, MoveOutcome, Snapshot};

pub use crate::effects::{BoardLayout, TwinkleField, TwinkleParticle, TWINKLE_THRESHOLD};
