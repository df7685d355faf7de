//! Drawing the puzzle sheet: grid lines plus clue numbers.

pub mod clues;
pub mod glyph;
pub mod grid;

pub use clues::draw_clues;
pub use glyph::Glyphs;
pub use grid::draw_grid;

use crate::clues::Clues;
use crate::{PicrossError, Result};
use image::{Rgb, RgbImage};

pub const INK: Rgb<u8> = Rgb([0, 0, 0]);
pub const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

/// Largest sheet we are willing to allocate, in pixels.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Tunable drawing constants. Defaults give 30px cells, 25px per clue
/// number and 200px of extra canvas on each axis for the clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    cell_size: u32,
    pitch: u32,
    margin: u32,
    offset: Option<u32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { cell_size: 30, pitch: 25, margin: 200, offset: None }
    }
}

impl RenderOptions {
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size.max(1);
        self
    }

    pub fn with_pitch(mut self, pitch: u32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Fixed grid translation. Without it the grid starts 3/20 of the
    /// canvas height in from the top-left corner.
    pub fn with_offset(mut self, offset: Option<u32>) -> Self {
        self.offset = offset;
        self
    }
}

/// Pixel geometry for one puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: u32,
    pub rows: u32,
    pub cell: u32,
    pub pitch: u32,
    /// Distance of the grid's top-left corner from the canvas origin, on both axes.
    pub offset: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Layout {
    /// Fails with [`PicrossError::Shape`] when the sheet would not fit in
    /// `u32` canvas sizes, `i32` drawing coordinates or [`MAX_CANVAS_PIXELS`].
    pub fn new(cols: u32, rows: u32, options: &RenderOptions) -> Result<Self> {
        let too_big = || {
            PicrossError::Shape(format!(
                "{cols}x{rows} cells at {}px per cell with a {}px margin is too large to draw",
                options.cell_size, options.margin
            ))
        };
        let cell = options.cell_size;
        let canvas_width = cols
            .checked_mul(cell)
            .and_then(|w| w.checked_add(options.margin))
            .ok_or_else(too_big)?;
        let canvas_height = rows
            .checked_mul(cell)
            .and_then(|h| h.checked_add(options.margin))
            .ok_or_else(too_big)?;
        if canvas_width as u64 * canvas_height as u64 > MAX_CANVAS_PIXELS {
            return Err(too_big());
        }
        let offset = options.offset.unwrap_or((canvas_height as u64 * 3 / 20) as u32);

        // every grid line, text anchor and clue band must stay in i32
        let lines = cols.max(rows) as u64 + 1;
        let far_edge = offset as u64 + lines * cell as u64;
        let widest_band = lines * options.pitch as u64;
        if far_edge > i32::MAX as u64 || widest_band > i32::MAX as u64 {
            return Err(too_big());
        }

        Ok(Self { cols, rows, cell, pitch: options.pitch, offset, canvas_width, canvas_height })
    }

    pub fn blank_canvas(&self) -> RgbImage {
        RgbImage::from_pixel(self.canvas_width, self.canvas_height, PAPER)
    }

    /// Left (x) or top (y) edge of grid line `i`.
    pub fn line_pos(&self, i: u32) -> i32 {
        (self.offset + i * self.cell) as i32
    }
}

/// Blank sheet with the grid and every clue drawn on it.
pub fn render_puzzle(clues: &Clues, layout: &Layout, glyphs: &Glyphs) -> RgbImage {
    let mut canvas = layout.blank_canvas();
    draw_grid(&mut canvas, layout);
    draw_clues(&mut canvas, clues, layout, glyphs);
    canvas
}
