//! Binary images: grayscale sources reduced to black and white cells.

use crate::{PicrossError, Result};
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// Luma cutoff: anything brighter is white.
pub const DEFAULT_THRESHOLD: u8 = 127;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Black,
    White,
}

impl Cell {
    pub fn is_black(self) -> bool {
        self == Cell::Black
    }
}

/// Row-major grid of cells, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl BinaryImage {
    pub fn new(width: usize, height: usize, fill: Cell) -> Self {
        Self { width, height, cells: vec![fill; width * height] }
    }

    /// Build from literal rows. All rows must share one length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PicrossError::Shape(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { width, height, cells })
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Threshold an 8-bit luma image: intensity > `threshold` is white.
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        let (w, h) = image.dimensions();
        let cells = image
            .pixels()
            .map(|p| if p.0[0] > threshold { Cell::White } else { Cell::Black })
            .collect();
        Self { width: w as usize, height: h as usize, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// One slice per row, `height()` of them even when the width is 0.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).map(move |y| self.get(x, y))
    }
}

/// Decode any format `image` understands.
pub fn open_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|source| PicrossError::Load { path: path.to_path_buf(), source })
}

/// Load `path` as grayscale and threshold it.
pub fn load_binary(path: impl AsRef<Path>, threshold: u8) -> Result<BinaryImage> {
    let image = open_image(path)?;
    Ok(BinaryImage::from_luma(&image.to_luma8(), threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn threshold_is_strictly_greater() {
        let img = GrayImage::from_fn(4, 1, |x, _| Luma([[0, 127, 128, 255][x as usize]]));
        let bin = BinaryImage::from_luma(&img, DEFAULT_THRESHOLD);
        let row: Vec<Cell> = bin.rows().next().unwrap().to_vec();
        assert_eq!(row, vec![Cell::Black, Cell::Black, Cell::White, Cell::White]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![Cell::Black, Cell::White], vec![Cell::Black]];
        assert!(matches!(BinaryImage::from_rows(rows), Err(PicrossError::Shape(_))));
    }

    #[test]
    fn zero_width_keeps_its_empty_rows() {
        let bin = BinaryImage::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!((bin.width(), bin.height()), (0, 2));
        let rows: Vec<&[Cell]> = bin.rows().collect();
        assert_eq!(rows, vec![&[][..], &[][..]]);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_binary("/definitely/not/here.png", DEFAULT_THRESHOLD).unwrap_err();
        assert!(matches!(err, PicrossError::Load { .. }));
    }
}
