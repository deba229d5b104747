//! Error types for machine configuration and player input

use thiserror::Error;

use crate::Money;
use crate::symbols::Symbol;

/// Fatal configuration errors, raised while a machine is being built
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Grid needs more symbols than the pool holds
    #[error("Grid needs {required} symbols but the pool only holds {available}")]
    GridTooLarge { required: usize, available: usize },

    /// Grid with no reels or no rows
    #[error("Grid must have at least one reel and one row (got {reels}×{rows})")]
    EmptyGrid { reels: usize, rows: usize },

    /// Symbol has a weight but no payout value
    #[error("Symbol {0} has a weight but no value")]
    MissingValue(Symbol),

    /// Symbol has a payout value but no weight
    #[error("Symbol {0} has a value but no weight")]
    MissingWeight(Symbol),

    /// Same symbol listed twice
    #[error("Symbol {0} is listed more than once")]
    DuplicateSymbol(Symbol),

    /// Bet limits are not a valid range
    #[error("Invalid bet limits: min {min}, max {max}")]
    InvalidLimits { min: Money, max: Money },

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Config file extension not recognized
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Recoverable input errors; the caller re-prompts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not an integer
    #[error("'{0}' is not an integer")]
    NotANumber(String),

    /// Input is not a decimal amount
    #[error("'{0}' is not a decimal")]
    NotADecimal(String),

    /// More than two digits after the decimal point
    #[error("{0} has too many digits after the decimal point")]
    TooManyDecimalPlaces(Money),

    /// Zero or negative amount
    #[error("Amount must be positive (got {0})")]
    NonPositiveAmount(Money),

    /// Bet per line outside the configured range
    #[error("Bet {bet} must be between {min} and {max}")]
    BetOutOfRange { bet: Money, min: Money, max: Money },

    /// Deposit below the minimum bet
    #[error("Deposit {amount} must be at least the minimum bet ({min})")]
    DepositTooSmall { amount: Money, min: Money },

    /// Total wager exceeds the balance
    #[error("Total bet {required} exceeds balance {available}")]
    InsufficientBalance { required: Money, available: Money },

    /// Empty line selection
    #[error("No lines selected")]
    NoLinesSelected,

    /// Line index outside [1, max]
    #[error("Line {line} is out of range (1 - {max})")]
    LineOutOfRange { line: usize, max: usize },

    /// Money arithmetic left the representable range
    #[error("Amount is too large")]
    AmountOverflow,
}

/// Any error surfaced by the slot core
#[derive(Error, Debug)]
pub enum SlotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SlotError {
    /// Fatal startup error?
    pub fn is_config(&self) -> bool {
        matches!(self, SlotError::Config(_))
    }

    /// Recoverable input error?
    pub fn is_validation(&self) -> bool {
        matches!(self, SlotError::Validation(_))
    }
}

/// Result type for slot operations
pub type SlotResult<T> = Result<T, SlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err: SlotError = ConfigError::GridTooLarge {
            required: 100,
            available: 10,
        }
        .into();
        assert!(err.is_config());
        assert!(!err.is_validation());

        let err: SlotError = ValidationError::NoLinesSelected.into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_messages() {
        let err = ValidationError::LineOutOfRange { line: 4, max: 3 };
        assert_eq!(err.to_string(), "Line 4 is out of range (1 - 3)");

        let err = ConfigError::MissingValue(Symbol::new('Q'));
        assert_eq!(err.to_string(), "Symbol Q has a weight but no value");
    }
}
