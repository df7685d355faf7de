use super::{Layout, INK};
use image::RgbImage;
use imageproc::drawing::draw_line_segment_mut;

/// Draw `rows + 1` horizontal and `cols + 1` vertical 1px lines forming the
/// empty puzzle grid.
pub fn draw_grid(canvas: &mut RgbImage, layout: &Layout) {
    let left = layout.line_pos(0) as f32;
    let top = left;
    let right = layout.line_pos(layout.cols) as f32;
    let bottom = layout.line_pos(layout.rows) as f32;

    for i in 0..=layout.rows {
        let y = layout.line_pos(i) as f32;
        draw_line_segment_mut(canvas, (left, y), (right, y), INK);
    }
    for i in 0..=layout.cols {
        let x = layout.line_pos(i) as f32;
        draw_line_segment_mut(canvas, (x, top), (x, bottom), INK);
    }
}
