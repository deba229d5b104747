//! Grid shape and drawn grids

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::symbols::Symbol;

/// Grid specification (reels × rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: usize,
    /// Number of visible rows per reel
    pub rows: usize,
}

impl GridSpec {
    pub fn new(reels: usize, rows: usize) -> Self {
        Self { reels, rows }
    }

    /// Classic 3×3
    pub fn classic_3x3() -> Self {
        Self { reels: 3, rows: 3 }
    }

    /// Total grid positions; `None` if reels × rows overflows
    pub fn total_positions(&self) -> Option<usize> {
        self.reels.checked_mul(self.rows)
    }

    /// Highest line a player can bet on (one line per row)
    pub fn max_lines(&self) -> usize {
        self.rows
    }

    /// Reject degenerate grids
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reels == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                reels: self.reels,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Reject degenerate grids and grids a pool of `available` can't fill
    ///
    /// An overflowing position count is reported as `usize::MAX` required.
    pub fn check_capacity(&self, available: usize) -> Result<(), ConfigError> {
        self.validate()?;
        match self.total_positions() {
            Some(required) if required <= available => Ok(()),
            required => Err(ConfigError::GridTooLarge {
                required: required.unwrap_or(usize::MAX),
                available,
            }),
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_3x3()
    }
}

/// A drawn grid, column-major
///
/// `columns[reel][row]`. Every column has the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    columns: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Wrap pre-built columns
    ///
    /// Returns `None` if the columns are ragged.
    pub fn from_columns(columns: Vec<Vec<Symbol>>) -> Option<Self> {
        let rows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|c| c.len() != rows) {
            return None;
        }
        Some(Self { columns })
    }

    /// Build from rows as they appear on screen (top to bottom)
    pub fn from_rows<R: AsRef<[Symbol]>>(rows: &[R]) -> Option<Self> {
        let reels = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != reels) {
            return None;
        }
        let columns = (0..reels)
            .map(|reel| rows.iter().map(|row| row.as_ref()[reel]).collect())
            .collect();
        Some(Self { columns })
    }

    pub(crate) fn from_columns_unchecked(columns: Vec<Vec<Symbol>>) -> Self {
        Self { columns }
    }

    pub fn reels(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn columns(&self) -> &[Vec<Symbol>] {
        &self.columns
    }

    /// Symbol at (reel, row), zero-based
    pub fn symbol_at(&self, reel: usize, row: usize) -> Option<Symbol> {
        self.columns.get(reel).and_then(|c| c.get(row)).copied()
    }

    /// Symbols across all reels at one row, left to right
    pub fn row(&self, row: usize) -> Option<Vec<Symbol>> {
        self.columns.iter().map(|c| c.get(row).copied()).collect()
    }

    /// Appearances of `symbol` anywhere in the grid
    pub fn count(&self, symbol: Symbol) -> usize {
        self.columns
            .iter()
            .flatten()
            .filter(|&&s| s == symbol)
            .count()
    }
}

/// One text line per row, cells joined by ` | `
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for (reel, column) in self.columns.iter().enumerate() {
                if reel > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{}", column[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
