//! Symbol definitions and the weight/value table

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Money;
use crate::error::ConfigError;

/// A reel icon
///
/// Opaque identity; weight and value are looked up through a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    pub fn glyph(&self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(glyph: char) -> Self {
        Self(glyph)
    }
}

/// Draw weights and payout multipliers, keyed by symbol
///
/// Both maps always hold exactly the same symbols. Immutable once built;
/// share it by cloning into the engine and paytable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SymbolTableSpec", into = "SymbolTableSpec")]
pub struct SymbolTable {
    weights: BTreeMap<Symbol, u32>,
    values: BTreeMap<Symbol, u32>,
}

/// Serialized shape of a [`SymbolTable`], validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolTableSpec {
    /// Instances of each symbol in the draw pool
    pub weights: BTreeMap<Symbol, u32>,
    /// Payout multiplier per symbol
    pub values: BTreeMap<Symbol, u32>,
}

impl SymbolTable {
    /// Build from weight and value pairs
    ///
    /// Fails if a symbol appears twice in either list, or if the two lists
    /// don't name the same symbols.
    pub fn new(
        weights: impl IntoIterator<Item = (Symbol, u32)>,
        values: impl IntoIterator<Item = (Symbol, u32)>,
    ) -> Result<Self, ConfigError> {
        let weights = collect_unique(weights)?;
        let values = collect_unique(values)?;
        Self::from_maps(weights, values)
    }

    fn from_maps(
        weights: BTreeMap<Symbol, u32>,
        values: BTreeMap<Symbol, u32>,
    ) -> Result<Self, ConfigError> {
        if let Some(symbol) = weights.keys().find(|s| !values.contains_key(s)) {
            return Err(ConfigError::MissingValue(*symbol));
        }
        if let Some(symbol) = values.keys().find(|s| !weights.contains_key(s)) {
            return Err(ConfigError::MissingWeight(*symbol));
        }
        Ok(Self { weights, values })
    }

    /// The classic five-symbol machine
    ///
    /// | Symbol | Weight | Value |
    /// |--------|--------|-------|
    /// | A      | 1      | 5     |
    /// | B      | 1      | 5     |
    /// | C      | 1      | 5     |
    /// | D      | 2      | 4     |
    /// | E      | 5      | 2     |
    pub fn classic() -> Self {
        let weights = BTreeMap::from([
            (Symbol('A'), 1),
            (Symbol('B'), 1),
            (Symbol('C'), 1),
            (Symbol('D'), 2),
            (Symbol('E'), 5),
        ]);
        let values = BTreeMap::from([
            (Symbol('A'), 5),
            (Symbol('B'), 5),
            (Symbol('C'), 5),
            (Symbol('D'), 4),
            (Symbol('E'), 2),
        ]);
        Self { weights, values }
    }

    /// Draw weight of a symbol
    pub fn weight(&self, symbol: Symbol) -> Option<u32> {
        self.weights.get(&symbol).copied()
    }

    /// Payout multiplier of a symbol
    pub fn value(&self, symbol: Symbol) -> Option<u32> {
        self.values.get(&symbol).copied()
    }

    /// Payout multiplier as money-compatible decimal
    pub fn multiplier(&self, symbol: Symbol) -> Option<Money> {
        self.value(symbol).map(Money::from)
    }

    /// Symbols with their weights, ordered by symbol
    pub fn weights(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.weights.iter().map(|(s, w)| (*s, *w))
    }

    /// Symbols with their values, ordered by symbol
    pub fn values(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.values.iter().map(|(s, v)| (*s, *v))
    }

    /// All symbols, ordered
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.weights.keys().copied()
    }

    /// Size of a freshly built pool
    pub fn total_weight(&self) -> usize {
        self.weights.values().map(|&w| w as usize).sum()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<SymbolTableSpec> for SymbolTable {
    type Error = ConfigError;

    fn try_from(spec: SymbolTableSpec) -> Result<Self, Self::Error> {
        Self::from_maps(spec.weights, spec.values)
    }
}

impl From<SymbolTable> for SymbolTableSpec {
    fn from(table: SymbolTable) -> Self {
        Self {
            weights: table.weights,
            values: table.values,
        }
    }
}

fn collect_unique(
    pairs: impl IntoIterator<Item = (Symbol, u32)>,
) -> Result<BTreeMap<Symbol, u32>, ConfigError> {
    let mut map = BTreeMap::new();
    for (symbol, n) in pairs {
        if map.insert(symbol, n).is_some() {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
    }
    Ok(map)
}
