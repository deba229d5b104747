//! Payline selection

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A straight payline, identified by its 1-based row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Line(usize);

impl Line {
    /// Line `index` on a machine with `max_lines` rows
    pub fn new(index: usize, max_lines: usize) -> Result<Self, ValidationError> {
        if index == 0 || index > max_lines {
            return Err(ValidationError::LineOutOfRange {
                line: index,
                max: max_lines,
            });
        }
        Ok(Self(index))
    }

    /// 1-based line number as shown to the player
    pub fn index(&self) -> usize {
        self.0
    }

    /// Zero-based grid row this line reads
    pub fn row(&self) -> usize {
        self.0 - 1
    }

    /// Every line on a machine, 1 through `max_lines`
    pub fn all(max_lines: usize) -> Vec<Line> {
        (1..=max_lines).map(Line).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a whitespace-separated line selection such as `"1 3 3"`
///
/// Order and duplicates are kept; a repeated line is a separate wager.
pub fn parse_lines(input: &str, max_lines: usize) -> Result<Vec<Line>, ValidationError> {
    let mut lines = Vec::new();
    for token in input.split_whitespace() {
        let index: usize = token
            .parse()
            .map_err(|_| ValidationError::NotANumber(token.to_string()))?;
        lines.push(Line::new(index, max_lines)?);
    }
    if lines.is_empty() {
        return Err(ValidationError::NoLinesSelected);
    }
    Ok(lines)
}
