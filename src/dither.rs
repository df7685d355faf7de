//! Atkinson dithering as an alternative to the plain threshold.

use crate::binarize::{BinaryImage, Cell};
use image::GrayImage;

/// Binarize with Atkinson error diffusion around `threshold`.
///
/// Each pixel snaps to black or white and 1/8 of the error goes to six
/// neighbours, so mid-tones come out as scattered black cells instead of one
/// solid block.
pub fn dither_atkinson(image: &GrayImage, threshold: u8) -> BinaryImage {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let mut errors: Vec<f32> = image.pixels().map(|p| p.0[0] as f32).collect();
    let mut cells = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_val = errors[idx].clamp(0.0, 255.0);
            let (cell, new_val) = if old_val > threshold as f32 {
                (Cell::White, 255.0)
            } else {
                (Cell::Black, 0.0)
            };
            cells.push(cell);

            let e = (old_val - new_val) / 8.0;
            if x + 1 < w { errors[idx + 1] += e; }
            if x + 2 < w { errors[idx + 2] += e; }
            if y + 1 < h {
                let below = idx + w;
                if x > 0 { errors[below - 1] += e; }
                errors[below] += e;
                if x + 1 < w { errors[below + 1] += e; }
            }
            if y + 2 < h {
                errors[idx + 2 * w] += e;
            }
        }
    }

    BinaryImage::from_cells(w, h, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn extremes_stay_solid() {
        let black = dither_atkinson(&GrayImage::from_pixel(6, 4, Luma([0])), 127);
        assert_eq!(black, BinaryImage::new(6, 4, Cell::Black));

        let white = dither_atkinson(&GrayImage::from_pixel(6, 4, Luma([255])), 127);
        assert_eq!(white, BinaryImage::new(6, 4, Cell::White));
    }

    #[test]
    fn mid_gray_mixes_cells() {
        let bin = dither_atkinson(&GrayImage::from_pixel(16, 16, Luma([128])), 127);
        let black = bin.rows().flatten().filter(|c| c.is_black()).count();
        assert!(black > 0 && black < 16 * 16);
    }
}
