//! Cosmetic layer: board geometry, colors, and merge twinkles.
//!
//! Everything here is presentation support a renderer reads from. None of it
//! feeds back into the engine or session.

pub mod layout;
pub mod theme;
pub mod twinkle;

pub use layout::BoardLayout;
pub use theme::{tile_color, text_color, Rgb};
pub use twinkle::{TwinkleField, TwinkleParticle, TWINKLE_THRESHOLD};
