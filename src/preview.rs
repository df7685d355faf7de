//! Terminal preview of a binary image with its clues.

use crate::binarize::BinaryImage;
use crate::clues::Clues;

const SLOT: usize = 3;

/// Text picture of the solved puzzle: column clues stacked above the grid,
/// row clues to the left, black cells as full blocks.
pub fn render_preview(image: &BinaryImage, clues: &Clues) -> String {
    let row_labels: Vec<String> = clues
        .rows
        .iter()
        .map(|runs| runs.iter().map(u32::to_string).collect::<Vec<_>>().join(" "))
        .collect();
    let label_w = row_labels.iter().map(String::len).max().unwrap_or(0);
    let band = clues.max_column_len();

    let mut out = String::new();
    for level in 0..band {
        out.push_str(&" ".repeat(label_w + 1));
        for runs in &clues.columns {
            // bottom-align so the last run touches the grid
            match (level + runs.len()).checked_sub(band) {
                Some(k) => out.push_str(&format!("{:>SLOT$}", runs[k])),
                None => out.push_str(&" ".repeat(SLOT)),
            }
        }
        out.push('\n');
    }

    for (y, label) in row_labels.iter().enumerate() {
        out.push_str(&format!("{label:>label_w$} "));
        for x in 0..image.width() {
            out.push_str(if image.get(x, y).is_black() { "███" } else { " · " });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binarize::Cell::{Black as B, White as W};
    use crate::clues::count_runs;

    #[test]
    fn lays_out_clues_around_cells() {
        let image = BinaryImage::from_rows(vec![vec![B, W, B], vec![B, B, W]]).unwrap();
        let text = render_preview(&image, &count_runs(&image));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "      2  1  1");
        assert_eq!(lines[1], "1 1 ███ · ███");
        assert_eq!(lines[2], "  2 ██████ · ");
    }

    #[test]
    fn empty_image_previews_as_nothing() {
        let image = BinaryImage::new(0, 0, W);
        assert_eq!(render_preview(&image, &count_runs(&image)), "");
    }
}
