//! Paytable and payline evaluation

use serde::Serialize;

use crate::Money;
use crate::bet::Bet;
use crate::error::ValidationError;
use crate::grid::Grid;
use crate::line::Line;
use crate::symbols::{Symbol, SymbolTable};

/// A win on a single payline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineWin {
    /// Winning line
    pub line: Line,
    /// Symbol filling the line
    pub symbol: Symbol,
    /// Payout multiplier applied
    pub multiplier: Money,
    /// Win amount (bet × multiplier)
    pub amount: Money,
}

/// Result of evaluating a set of lines against a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Sum of all line wins
    pub winnings: Money,
    /// Winning lines in request order, duplicates included
    pub winning_lines: Vec<Line>,
    /// Per-line detail, parallel to `winning_lines`
    pub line_wins: Vec<LineWin>,
}

impl Evaluation {
    /// Check if anything paid
    pub fn is_win(&self) -> bool {
        !self.line_wins.is_empty()
    }
}

/// Payout side of a machine
///
/// Holds the value half of a [`SymbolTable`]. A line pays when every reel
/// shows the same symbol on that line's row.
#[derive(Debug, Clone)]
pub struct PayTable {
    symbols: SymbolTable,
}

impl PayTable {
    pub fn new(symbols: SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Evaluate the requested lines
    ///
    /// Lines are visited in the order given; a line listed twice is checked
    /// and paid twice. Fails with [`ValidationError::LineOutOfRange`] if a
    /// line's row doesn't exist in `grid`.
    pub fn evaluate(
        &self,
        lines: &[Line],
        grid: &Grid,
        bet_per_line: Bet,
    ) -> Result<Evaluation, ValidationError> {
        let mut winnings = Money::ZERO;
        let mut winning_lines = Vec::new();
        let mut line_wins = Vec::new();

        for &line in lines {
            if line.index() == 0 || line.index() > grid.rows() {
                log::warn!("Rejecting line {} on a {}-row grid", line, grid.rows());
                return Err(ValidationError::LineOutOfRange {
                    line: line.index(),
                    max: grid.rows(),
                });
            }

            if let Some(win) = self.evaluate_line(grid, line, bet_per_line)? {
                winnings = winnings
                    .checked_add(win.amount)
                    .ok_or(ValidationError::AmountOverflow)?;
                winning_lines.push(line);
                line_wins.push(win);
            }
        }

        Ok(Evaluation {
            winnings,
            winning_lines,
            line_wins,
        })
    }

    fn evaluate_line(
        &self,
        grid: &Grid,
        line: Line,
        bet_per_line: Bet,
    ) -> Result<Option<LineWin>, ValidationError> {
        let row = line.row();
        let Some(first) = grid.symbol_at(0, row) else {
            return Ok(None);
        };

        let complete = grid.columns().iter().all(|column| column[row] == first);
        if !complete {
            return Ok(None);
        }

        // A symbol outside the table never pays
        let Some(multiplier) = self.symbols.multiplier(first) else {
            return Ok(None);
        };
        let amount = bet_per_line
            .amount()
            .checked_mul(multiplier)
            .ok_or(ValidationError::AmountOverflow)?;

        Ok(Some(LineWin {
            line,
            symbol: first,
            multiplier,
            amount,
        }))
    }
}

/// Evaluate `lines` against `grid` with the given payout table
pub fn evaluate(
    lines: &[Line],
    grid: &Grid,
    bet_per_line: Bet,
    values: &SymbolTable,
) -> Result<Evaluation, ValidationError> {
    PayTable::new(values.clone()).evaluate(lines, grid, bet_per_line)
}
