//! Round orchestration: spin, evaluate, settle

use rand::Rng;
use serde::Serialize;

use crate::Money;
use crate::bet::{Bet, BetLimits};
use crate::config::MachineConfig;
use crate::error::{SlotResult, ValidationError};
use crate::grid::{Grid, GridSpec};
use crate::line::Line;
use crate::paytable::{LineWin, PayTable};
use crate::reel::ReelEngine;

/// A player's stake for one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wager {
    lines: Vec<Line>,
    bet_per_line: Bet,
    total: Money,
}

impl Wager {
    /// Fails on an empty line selection or a total stake that overflows
    pub fn new(lines: Vec<Line>, bet_per_line: Bet) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::NoLinesSelected);
        }
        let total = bet_per_line.total_for(lines.len())?;
        Ok(Self {
            lines,
            bet_per_line,
            total,
        })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn bet_per_line(&self) -> Bet {
        self.bet_per_line
    }

    /// Bet × number of lines, duplicates counted
    pub fn total(&self) -> Money {
        self.total
    }
}

/// Outcome of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// Drawn grid
    pub grid: Grid,
    /// Total paid out
    pub winnings: Money,
    /// Winning lines in request order
    pub winning_lines: Vec<Line>,
    /// Per-line detail
    pub line_wins: Vec<LineWin>,
    /// Total staked
    pub total_wager: Money,
    /// Winnings minus total wager; negative on a loss
    pub net: Money,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }
}

/// A configured machine
///
/// Immutable after construction; every round builds its own pool, so one
/// machine can serve any number of callers.
#[derive(Debug, Clone)]
pub struct SlotMachine {
    engine: ReelEngine,
    paytable: PayTable,
    limits: BetLimits,
}

impl SlotMachine {
    /// Build from a config, checking every startup invariant
    pub fn new(config: MachineConfig) -> SlotResult<Self> {
        config.validate()?;
        let engine = ReelEngine::new(config.grid, config.symbols.clone())?;
        let paytable = PayTable::new(config.symbols);
        Ok(Self {
            engine,
            paytable,
            limits: config.limits,
        })
    }

    /// The classic 3×3 machine
    pub fn classic() -> SlotResult<Self> {
        Self::new(MachineConfig::classic())
    }

    pub fn grid_spec(&self) -> GridSpec {
        self.engine.spec()
    }

    pub fn max_lines(&self) -> usize {
        self.engine.spec().max_lines()
    }

    pub fn limits(&self) -> &BetLimits {
        &self.limits
    }

    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    /// Build a wager, enforcing table limits and the player's balance
    pub fn place_wager(
        &self,
        lines: Vec<Line>,
        bet_per_line: Bet,
        balance: Money,
    ) -> Result<Wager, ValidationError> {
        for line in &lines {
            if line.index() > self.max_lines() {
                return Err(ValidationError::LineOutOfRange {
                    line: line.index(),
                    max: self.max_lines(),
                });
            }
        }
        self.limits.check_bet(bet_per_line)?;
        self.limits
            .check_affordable(bet_per_line, lines.len(), balance)?;
        Wager::new(lines, bet_per_line)
    }

    /// Play one round
    pub fn play<R: Rng + ?Sized>(&self, wager: &Wager, rng: &mut R) -> SlotResult<RoundResult> {
        let grid = self.engine.spin(rng)?;
        let eval = self
            .paytable
            .evaluate(wager.lines(), &grid, wager.bet_per_line())?;

        let total_wager = wager.total();
        let net = eval.winnings - total_wager;
        log::debug!(
            "Round: wagered {} on {} lines, won {} (net {})",
            total_wager,
            wager.lines().len(),
            eval.winnings,
            net
        );

        Ok(RoundResult {
            grid,
            winnings: eval.winnings,
            winning_lines: eval.winning_lines,
            line_wins: eval.line_wins,
            total_wager,
            net,
        })
    }
}
