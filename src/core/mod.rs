//! Core types: grid, directions, RNG.
//!
//! These are the fundamental building blocks the engine and session are
//! written against. Nothing here knows about merge rules or scoring.

pub mod direction;
pub mod grid;
pub mod rng;

pub use direction::Direction;
pub use grid::{Grid, GRID_SIZE};
pub use rng::{GameRng, GameRngState};
