//! Session layer: lifecycle, input gating, and the renderer-facing snapshot.

pub mod game;

pub use game::{GameSession, Intent, MoveOutcome, Snapshot};
