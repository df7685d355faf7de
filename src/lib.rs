//! Turn black-and-white images into picross (nonogram) puzzles.

pub mod binarize;
pub mod clues;
pub mod dither;
pub mod preview;
pub mod render;
pub mod resample;

pub use binarize::{load_binary, open_image, BinaryImage, Cell, DEFAULT_THRESHOLD};
pub use clues::{count_runs, Clues};
pub use render::{Glyphs, Layout, RenderOptions};
pub use resample::GridSize;

use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicrossError {
    #[error("could not load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not save image {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Font error: {0}")]
    Font(String),
    #[error("Shape error: {0}")]
    Shape(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PicrossError>;

/// A finished puzzle: the cells it was built from, their clues and the
/// rendered sheet.
pub struct Puzzle {
    pub binary: BinaryImage,
    pub clues: Clues,
    pub sheet: RgbImage,
}

impl Puzzle {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.sheet
            .save(path)
            .map_err(|source| PicrossError::Save { path: path.to_path_buf(), source })
    }

    pub fn write_clues(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &self.clues)?;
        Ok(())
    }
}

/// Image → binary cells → clues → puzzle sheet.
pub struct Generator {
    threshold: u8,
    dither: bool,
    invert: bool,
    cells: Option<GridSize>,
    options: RenderOptions,
    glyphs: Glyphs,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            dither: false,
            invert: false,
            cells: None,
            options: RenderOptions::default(),
            glyphs: Glyphs::default(),
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    pub fn with_invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// Shrink the source to `cells` before binarizing, one pixel per cell.
    pub fn with_cells(mut self, cells: Option<GridSize>) -> Self {
        self.cells = cells;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn binarize(&self, image: &DynamicImage) -> BinaryImage {
        let mut gray = image.to_luma8();
        if self.invert {
            image::imageops::invert(&mut gray);
        }
        if let Some(size) = self.cells {
            gray = resample::downsample(&gray, size);
        }
        if self.dither {
            dither::dither_atkinson(&gray, self.threshold)
        } else {
            BinaryImage::from_luma(&gray, self.threshold)
        }
    }

    /// Fails only when the sheet for this image and these options is too
    /// large to draw.
    pub fn generate(&self, image: &DynamicImage) -> Result<Puzzle> {
        let binary = self.binarize(image);
        log::info!("binary image is {}x{} cells", binary.width(), binary.height());
        for row in binary.rows() {
            let bits: String = row.iter().map(|c| if c.is_black() { '0' } else { '1' }).collect();
            log::debug!("{bits}");
        }

        let clues = count_runs(&binary);
        log::debug!("row clues: {:?}", clues.rows);
        log::debug!("column clues: {:?}", clues.columns);

        let layout = Layout::new(binary.width() as u32, binary.height() as u32, &self.options)?;
        let clue_room = clues.max_column_len().max(clues.max_row_len()) as u64 * layout.pitch as u64;
        if clue_room > layout.offset as u64 {
            log::warn!(
                "clues need {clue_room}px but the grid offset is {}px; some numbers will be clipped",
                layout.offset
            );
        }

        let sheet = render::render_puzzle(&clues, &layout, &self.glyphs);
        Ok(Puzzle { binary, clues, sheet })
    }
}
