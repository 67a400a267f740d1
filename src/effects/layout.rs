//! Board geometry for renderers and the particle layer.
//!
//! All presentation geometry lives in this one immutable struct, computed
//! once at startup from the host window size. The engine and session never
//! see it.

use crate::core::grid::GRID_SIZE;

/// Design-space board width the scale factor is derived from.
const BASE_WIDTH: f32 = 500.0;
/// Design-space board height (board plus header).
const BASE_HEIGHT: f32 = 600.0;

/// Immutable pixel layout of the board within the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    /// Uniform scale from design space to the host window.
    pub scale: f32,
    /// Scaled board width (and height of the grid area).
    pub board_width: f32,
    /// Scaled board height including the header.
    pub board_height: f32,
    /// Padding between the board edge and the grid.
    pub grid_padding: f32,
    /// Outer size of one cell, including its padding.
    pub cell_size: f32,
    /// Inner size of a tile.
    pub tile_size: f32,
    /// Height of the title/score header above the grid.
    pub header_height: f32,
}

impl BoardLayout {
    /// Compute the layout for a window of the given size.
    ///
    /// The board keeps its design aspect ratio and scales to fit the smaller
    /// window dimension.
    #[must_use]
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let scale = (window_width / BASE_WIDTH).min(window_height / BASE_HEIGHT);

        let board_width = BASE_WIDTH * scale;
        let board_height = BASE_HEIGHT * scale;
        let grid_padding = 15.0 * scale;
        let grid_width = board_width - 2.0 * grid_padding;
        let cell_size = grid_width / GRID_SIZE as f32;
        let cell_padding = 15.0 * scale;
        let tile_size = cell_size - 2.0 * cell_padding;
        let header_height = 100.0 * scale;

        Self {
            scale,
            board_width,
            board_height,
            grid_padding,
            cell_size,
            tile_size,
            header_height,
        }
    }

    /// Center of the tile at `(row, col)`, in board-local pixels.
    #[must_use]
    pub fn tile_center(&self, row: usize, col: usize) -> (f32, f32) {
        let x = self.grid_padding + col as f32 * self.cell_size + self.cell_size / 2.0;
        let y = self.header_height + row as f32 * self.cell_size + self.cell_size / 2.0;
        (x, y)
    }
}
