//! Fixed-size character buffer that card blocks are composed on.

use std::fmt;

/// A `height` x `width` block of cells, one `char` per cell.
///
/// Writes outside the block are dropped, so the buffer always keeps its
/// dimensions no matter what is drawn into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            cells: vec![vec![fill; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Write one cell. Returns `false` when the coordinate is outside.
    pub fn put(&mut self, row: usize, col: usize, ch: char) -> bool {
        match self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            Some(cell) => {
                *cell = ch;
                true
            }
            None => false,
        }
    }

    /// Write `text` starting at `(row, col)`, clipped to `max_col` (exclusive).
    ///
    /// Returns the number of chars that did not fit.
    pub fn write_clipped(&mut self, row: usize, col: usize, text: &str, max_col: usize) -> usize {
        let limit = max_col.min(self.width);
        let mut dropped = 0;
        for (offset, ch) in text.chars().enumerate() {
            let idx = col + offset;
            if idx >= limit || !self.put(row, idx, ch) {
                dropped += 1;
            }
        }
        dropped
    }

    /// Write `text` starting at `(row, col)`, clipped to the grid.
    pub fn write(&mut self, row: usize, col: usize, text: &str) -> usize {
        self.write_clipped(row, col, text, self.width)
    }

    pub fn row(&self, row: usize) -> Option<String> {
        self.cells.get(row).map(|line| line.iter().collect())
    }

    pub fn into_lines(self) -> Vec<String> {
        self.cells
            .into_iter()
            .map(|line| line.into_iter().collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.cells.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            for ch in line {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
