//! Run-length clues for every row and column of a binary image.

use crate::binarize::{BinaryImage, Cell};
use serde::{Deserialize, Serialize};

/// Ordered run lengths per line. `rows[y]` reads left to right,
/// `columns[x]` reads top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    pub rows: Vec<Vec<u32>>,
    pub columns: Vec<Vec<u32>>,
}

impl Clues {
    /// Longest row clue, 0 when every row is empty.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn max_column_len(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnState {
    Idle,
    InRun,
}

/// Count black runs along rows and columns in one row-major sweep.
///
/// Row runs are buffered in an accumulator and flushed on a white cell or at
/// the end of the row. Column runs are pushed when they start and extended in
/// place, so a run still open on the last row is already recorded.
pub fn count_runs(image: &BinaryImage) -> Clues {
    let (width, height) = (image.width(), image.height());

    let mut rows: Vec<Vec<u32>> = vec![Vec::new(); height];
    let mut columns: Vec<Vec<u32>> = vec![Vec::new(); width];
    let mut state = vec![ColumnState::Idle; width];

    for (y, row_runs) in rows.iter_mut().enumerate() {
        let mut run = 0u32;
        for x in 0..width {
            match image.get(x, y) {
                Cell::Black => {
                    run += 1;
                    match state[x] {
                        ColumnState::Idle => columns[x].push(1),
                        ColumnState::InRun => {
                            if let Some(last) = columns[x].last_mut() {
                                *last += 1;
                            }
                        }
                    }
                    state[x] = ColumnState::InRun;
                }
                Cell::White => {
                    if run > 0 {
                        row_runs.push(run);
                        run = 0;
                    }
                    state[x] = ColumnState::Idle;
                }
            }
        }
        if run > 0 {
            row_runs.push(run);
        }
    }

    Clues { rows, columns }
}
