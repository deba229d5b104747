//! Session statistics

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Money;
use crate::round::RoundResult;

/// Running totals across rounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_rounds: u64,
    pub total_wagered: Money,
    pub total_won: Money,
    pub winning_rounds: u64,
    pub losing_rounds: u64,
    pub biggest_win: Money,
    /// Times each line index paid
    pub line_hits: BTreeMap<usize, u64>,
}

impl SessionStats {
    pub fn record(&mut self, result: &RoundResult) {
        self.total_rounds += 1;
        self.total_wagered = self.total_wagered.saturating_add(result.total_wager);
        self.total_won = self.total_won.saturating_add(result.winnings);

        if result.is_win() {
            self.winning_rounds += 1;
        } else {
            self.losing_rounds += 1;
        }

        if result.winnings > self.biggest_win {
            self.biggest_win = result.winnings;
        }

        for line in &result.winning_lines {
            *self.line_hits.entry(line.index()).or_default() += 1;
        }
    }

    /// Won minus wagered
    pub fn net(&self) -> Money {
        self.total_won - self.total_wagered
    }

    /// Return to player, percent of wagered; saturates at `Money::MAX`
    pub fn rtp(&self) -> Money {
        if self.total_wagered.is_zero() {
            return Money::ZERO;
        }
        self.total_won
            .checked_div(self.total_wagered)
            .and_then(|ratio| ratio.checked_mul(Money::from(100)))
            .map_or(Money::MAX, |pct| pct.round_dp(4))
    }

    /// Percent of rounds that paid anything
    pub fn hit_rate(&self) -> f64 {
        if self.total_rounds > 0 {
            (self.winning_rounds as f64 / self.total_rounds as f64) * 100.0
        } else {
            0.0
        }
    }
}
