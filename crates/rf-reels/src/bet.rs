//! Money amounts, bets and table limits

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::error::{ConfigError, ValidationError};

/// Most fractional digits an amount may carry (cents)
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Parse a player-entered amount such as `"150"`, `"99.5"` or `"$12.25"`
///
/// Rejects anything that isn't a plain decimal or has more than two
/// fractional digits. Sign is not checked here.
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let amount =
        Decimal::from_str(digits).map_err(|_| ValidationError::NotADecimal(trimmed.to_string()))?;
    if amount.scale() > MAX_DECIMAL_PLACES {
        return Err(ValidationError::TooManyDecimalPlaces(amount));
    }
    Ok(amount)
}

/// Stake per payline
///
/// Always positive with at most two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bet(Money);

impl Bet {
    pub fn new(amount: Money) -> Result<Self, ValidationError> {
        if amount.scale() > MAX_DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimalPlaces(amount));
        }
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Money {
        self.0
    }

    /// Stake for `lines` independent paylines
    pub fn total_for(&self, lines: usize) -> Result<Money, ValidationError> {
        self.0
            .checked_mul(Money::from(lines))
            .ok_or(ValidationError::AmountOverflow)
    }
}

impl FromStr for Bet {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bet::new(parse_amount(s)?)
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Table limits for bets and deposits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLimits {
    /// Smallest bet per line; also the smallest deposit
    pub min_bet: Money,
    /// Largest bet per line
    pub max_bet: Money,
}

impl BetLimits {
    pub fn new(min_bet: Money, max_bet: Money) -> Self {
        Self { min_bet, max_bet }
    }

    /// $100 – $1000 per line
    pub fn classic() -> Self {
        Self {
            min_bet: Money::from(100),
            max_bet: Money::from(1000),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_bet <= Decimal::ZERO
            || self.min_bet > self.max_bet
            || self.min_bet.scale() > MAX_DECIMAL_PLACES
            || self.max_bet.scale() > MAX_DECIMAL_PLACES
        {
            return Err(ConfigError::InvalidLimits {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        Ok(())
    }

    /// Bet per line must sit inside [min_bet, max_bet]
    pub fn check_bet(&self, bet: Bet) -> Result<(), ValidationError> {
        let amount = bet.amount();
        if amount < self.min_bet || amount > self.max_bet {
            return Err(ValidationError::BetOutOfRange {
                bet: amount,
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        Ok(())
    }

    /// Total stake across `lines` must be covered by `balance`
    pub fn check_affordable(
        &self,
        bet: Bet,
        lines: usize,
        balance: Money,
    ) -> Result<(), ValidationError> {
        let required = bet.total_for(lines)?;
        if required > balance {
            return Err(ValidationError::InsufficientBalance {
                required,
                available: balance,
            });
        }
        Ok(())
    }

    /// Validate an opening deposit
    pub fn check_deposit(&self, amount: Money) -> Result<Money, ValidationError> {
        if amount.scale() > MAX_DECIMAL_PLACES {
            return Err(ValidationError::TooManyDecimalPlaces(amount));
        }
        if amount < self.min_bet {
            return Err(ValidationError::DepositTooSmall {
                amount,
                min: self.min_bet,
            });
        }
        Ok(amount)
    }
}

impl Default for BetLimits {
    fn default() -> Self {
        Self::classic()
    }
}
