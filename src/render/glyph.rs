//! Text for clue numbers: a built-in bitmap face or a TrueType font.

use super::INK;
use crate::{PicrossError, Result};
use fontdue::{Font, FontSettings};
use image::{Rgb, RgbImage};
use std::path::Path;

#[rustfmt::skip]
const DIGITS_5X7: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

pub enum Glyphs {
    /// 5x7 digits, each dot drawn as a `scale`×`scale` block.
    Bitmap { scale: u32 },
    /// Anti-aliased outlines rasterized at `px` pixels.
    Font { font: Font, px: f32 },
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::Bitmap { scale: 2 }
    }
}

impl Glyphs {
    pub fn from_font_file(path: impl AsRef<Path>, px: f32) -> Result<Self> {
        let data = std::fs::read(path)?;
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| PicrossError::Font(e.to_string()))?;
        Ok(Glyphs::Font { font, px })
    }

    /// Horizontal extent of `text` as [`Glyphs::draw_text`] would draw it.
    pub fn text_width(&self, text: &str) -> i32 {
        match self {
            Glyphs::Bitmap { scale } => {
                let scale = *scale as i32;
                let digits = text.chars().count() as i32;
                (digits * 6 * scale - scale).max(0)
            }
            Glyphs::Font { font, px } => {
                let advance: f32 = text.chars().map(|ch| font.metrics(ch, *px).advance_width).sum();
                advance.ceil() as i32
            }
        }
    }

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    /// Pixels outside the canvas are dropped. The bitmap face skips
    /// anything that is not an ASCII digit.
    pub fn draw_text(&self, canvas: &mut RgbImage, x: i32, baseline: i32, text: &str) {
        match self {
            Glyphs::Bitmap { scale } => {
                let scale = *scale as i32;
                let top = baseline - 7 * scale;
                for (i, ch) in text.chars().enumerate() {
                    if let Some(d) = ch.to_digit(10) {
                        let left = x + i as i32 * 6 * scale;
                        draw_bitmap_digit(canvas, left, top, &DIGITS_5X7[d as usize], scale);
                    }
                }
            }
            Glyphs::Font { font, px } => {
                let mut pen = x as f32;
                for ch in text.chars() {
                    let (metrics, bitmap) = font.rasterize(ch, *px);
                    let left = pen.round() as i32 + metrics.xmin;
                    let top = baseline - metrics.height as i32 - metrics.ymin;
                    for sy in 0..metrics.height {
                        for sx in 0..metrics.width {
                            let coverage = bitmap[sy * metrics.width + sx];
                            if coverage > 0 {
                                darken(canvas, left + sx as i32, top + sy as i32, coverage);
                            }
                        }
                    }
                    pen += metrics.advance_width;
                }
            }
        }
    }
}

fn draw_bitmap_digit(canvas: &mut RgbImage, left: i32, top: i32, rows: &[u8; 7], scale: i32) {
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..5 {
            if (bits >> (4 - col)) & 1 == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    put(canvas, left + col * scale + dx, top + row as i32 * scale + dy, INK);
                }
            }
        }
    }
}

fn put(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// Blend ink over whatever is already there by `coverage`/255.
fn darken(canvas: &mut RgbImage, x: i32, y: i32, coverage: u8) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    let keep = 255 - coverage as u16;
    for c in px.0.iter_mut() {
        *c = (*c as u16 * keep / 255) as u8;
    }
}
