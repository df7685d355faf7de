//! Shrinking a source image down to one pixel per puzzle cell.

use crate::{PicrossError, Result};
use image::{GrayImage, Luma};
use std::str::FromStr;

/// Target puzzle size in cells, written `WxH` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl FromStr for GridSize {
    type Err = PicrossError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || PicrossError::Shape(format!("expected WxH with non-zero sides, got {s:?}"));
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(bad)?;
        let cols: u32 = w.trim().parse().map_err(|_| bad())?;
        let rows: u32 = h.trim().parse().map_err(|_| bad())?;
        if cols == 0 || rows == 0 {
            return Err(bad());
        }
        Ok(Self { cols, rows })
    }
}

/// Average each source block that maps onto one cell.
///
/// Blocks cover `width / cols` by `height / rows` source pixels; edges are
/// rounded outward so every source pixel lands in some block.
pub fn downsample(image: &GrayImage, size: GridSize) -> GrayImage {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return GrayImage::new(0, 0);
    }

    let block_w = src_w as f32 / size.cols as f32;
    let block_h = src_h as f32 / size.rows as f32;

    GrayImage::from_fn(size.cols, size.rows, |col, row| {
        let x0 = ((col as f32 * block_w) as u32).min(src_w - 1);
        let y0 = ((row as f32 * block_h) as u32).min(src_h - 1);
        let x1 = (((col + 1) as f32 * block_w).ceil() as u32).clamp(x0 + 1, src_w);
        let y1 = (((row + 1) as f32 * block_h).ceil() as u32).clamp(y0 + 1, src_h);

        let mut sum = 0u64;
        for y in y0..y1 {
            for x in x0..x1 {
                sum += image.get_pixel(x, y).0[0] as u64;
            }
        }
        let count = ((x1 - x0) * (y1 - y0)) as u64;
        Luma([(sum / count) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_size() {
        assert_eq!("20x15".parse::<GridSize>().unwrap(), GridSize { cols: 20, rows: 15 });
        assert_eq!("3X4".parse::<GridSize>().unwrap(), GridSize { cols: 3, rows: 4 });
        assert!("0x4".parse::<GridSize>().is_err());
        assert!("12".parse::<GridSize>().is_err());
        assert!("ax4".parse::<GridSize>().is_err());
    }

    #[test]
    fn averages_blocks() {
        // left half black, right half white
        let src = GrayImage::from_fn(8, 4, |x, _| Luma([if x < 4 { 0 } else { 255 }]));
        let out = downsample(&src, GridSize { cols: 2, rows: 1 });
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn upsampling_repeats_pixels() {
        let src = GrayImage::from_fn(2, 1, |x, _| Luma([x as u8 * 200]));
        let out = downsample(&src, GridSize { cols: 4, rows: 2 });
        let row: Vec<u8> = (0..4).map(|x| out.get_pixel(x, 1).0[0]).collect();
        assert_eq!(row, vec![0, 0, 200, 200]);
    }
}
