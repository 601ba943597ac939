//! Level grid parsing
//!
//! A level is plain text: one line per brick row, one decimal digit per
//! column giving that brick's starting strength (0 = empty cell).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while reading a level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("cannot read level {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidChar {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("line {line} has {found} columns, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("level has no bricks")]
    Empty,
}

/// Rectangular grid of brick strengths, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGrid {
    rows: Vec<Vec<u8>>,
}

impl LevelGrid {
    /// Parse level text. Line and column numbers in errors are 1-based.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();

        for (line_idx, raw_line) in text.split_terminator('\n').enumerate() {
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let mut row = Vec::with_capacity(line.len());

            for (col_idx, c) in line.chars().enumerate() {
                let strength = c.to_digit(10).ok_or(LevelError::InvalidChar {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    found: c,
                })?;
                row.push(strength as u8);
            }

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LevelError::Ragged {
                        line: line_idx + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.first().is_none_or(|r| r.is_empty()) {
            return Err(LevelError::Empty);
        }

        Ok(Self { rows })
    }

    /// Read and parse a level file
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::parse(&text)?;
        log::info!(
            "Loaded level {} ({}x{}, {} bricks)",
            path.display(),
            grid.columns(),
            grid.rows(),
            grid.active_cells()
        );
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (uniform across rows)
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Strength at column `x`, row `y`
    pub fn strength(&self, x: usize, y: usize) -> Option<u8> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Cells in row-major order as `(x, y, strength)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &strength)| (x, y, strength))
        })
    }

    /// Number of cells holding a brick (strength > 0)
    pub fn active_cells(&self) -> usize {
        self.iter().filter(|&(_, _, s)| s > 0).count()
    }
}
