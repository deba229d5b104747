//! Player balance across rounds

use rf_reels::{Money, RoundResult, SessionStats, ValidationError};

/// Balance and running totals for one player sitting
#[derive(Debug, Clone)]
pub struct Session {
    balance: Money,
    stats: SessionStats,
}

impl Session {
    pub fn new(deposit: Money) -> Self {
        Self {
            balance: deposit,
            stats: SessionStats::default(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Apply a round's net to the balance
    ///
    /// Leaves the session untouched if the new balance would overflow.
    pub fn settle(&mut self, result: &RoundResult) -> Result<Money, ValidationError> {
        self.balance = self
            .balance
            .checked_add(result.net)
            .ok_or(ValidationError::AmountOverflow)?;
        self.stats.record(result);
        log::debug!(
            "Settled round: net {}, balance {}",
            result.net,
            self.balance
        );
        Ok(self.balance)
    }

    pub fn is_broke(&self) -> bool {
        self.balance <= Money::ZERO
    }
}
