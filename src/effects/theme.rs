//! Color tables for tiles, text, and overlays.
//!
//! Values above 2048 keep the 2048 styling; the win fires once and play
//! continues indefinitely with the same look.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Window background.
pub const BACKGROUND: Rgb = Rgb(250, 248, 239);
/// Grid background and score box.
pub const GRID: Rgb = Rgb(187, 173, 160);
/// Dark text for light tiles and headings.
pub const TEXT: Rgb = Rgb(119, 110, 101);
/// Light text for dark tiles and overlays.
pub const BRIGHT_TEXT: Rgb = Rgb(249, 246, 242);
/// Twinkle particle color (alpha supplied per particle).
pub const TWINKLE: Rgb = Rgb(255, 255, 255);

/// Tile face color for a value. Empty cells use the `0` entry; values above
/// 2048 fall back to the 2048 color.
#[must_use]
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => Rgb(205, 193, 180),
        2 => Rgb(238, 228, 218),
        4 => Rgb(237, 224, 200),
        8 => Rgb(242, 177, 121),
        16 => Rgb(245, 149, 99),
        32 => Rgb(246, 124, 95),
        64 => Rgb(246, 94, 59),
        128 => Rgb(237, 207, 114),
        256 => Rgb(237, 204, 97),
        512 => Rgb(237, 200, 80),
        1024 => Rgb(237, 197, 63),
        _ => Rgb(237, 194, 46),
    }
}

/// Tile text color: dark on the two lightest tiles, bright everywhere else.
#[must_use]
pub fn text_color(value: u32) -> Rgb {
    match value {
        2 | 4 => TEXT,
        _ => BRIGHT_TEXT,
    }
}
