use super::{Glyphs, Layout, INK};
use crate::clues::Clues;
use image::RgbImage;
use imageproc::drawing::draw_line_segment_mut;

/// Clue band separators plus the numbers themselves.
///
/// Column clues stack upward from the top edge of the grid and row clues
/// extend leftward from its left edge; in both cases the last run of a line
/// sits next to the grid and each earlier run moves one `pitch` further out.
pub fn draw_clues(canvas: &mut RgbImage, clues: &Clues, layout: &Layout, glyphs: &Glyphs) {
    let grid_edge = layout.line_pos(0);
    let pitch = layout.pitch as i32;
    // text anchor inside a cell, measured from its top-left corner
    let dx = (layout.cell * 11 / 40) as i32;
    let dy = (layout.cell * 3 / 5) as i32;

    let band_h = clues.max_column_len() as i32 * pitch;
    if band_h > 0 {
        let top = (grid_edge - band_h) as f32;
        for i in 0..=layout.cols {
            let x = layout.line_pos(i) as f32;
            draw_line_segment_mut(canvas, (x, top), (x, grid_edge as f32), INK);
        }
    }
    for (i, runs) in clues.columns.iter().enumerate().take(layout.cols as usize) {
        let slot_left = layout.line_pos(i as u32);
        let start = grid_edge - runs.len() as i32 * pitch;
        for (k, run) in runs.iter().enumerate() {
            let text = run.to_string();
            let x = fit_in_slot(slot_left, layout.cell as i32, dx, glyphs.text_width(&text));
            glyphs.draw_text(canvas, x, start + k as i32 * pitch + dy, &text);
        }
    }

    let band_w = clues.max_row_len() as i32 * pitch;
    if band_w > 0 {
        let left = (grid_edge - band_w) as f32;
        for i in 0..=layout.rows {
            let y = layout.line_pos(i) as f32;
            draw_line_segment_mut(canvas, (left, y), (grid_edge as f32, y), INK);
        }
    }
    for (i, runs) in clues.rows.iter().enumerate().take(layout.rows as usize) {
        let y = layout.line_pos(i as u32) + dy;
        let start = grid_edge - runs.len() as i32 * pitch;
        for (k, run) in runs.iter().enumerate() {
            let text = run.to_string();
            let slot_left = start + k as i32 * pitch;
            let x = fit_in_slot(slot_left, pitch, dx, glyphs.text_width(&text));
            glyphs.draw_text(canvas, x, y, &text);
        }
    }
}

/// Left edge for text in a slot: `dx` in from the slot's left side, pulled
/// back so the text ends before the slot's right boundary line.
fn fit_in_slot(slot_left: i32, slot_width: i32, dx: i32, text_width: i32) -> i32 {
    (slot_left + dx).min(slot_left + slot_width - 1 - text_width)
}
