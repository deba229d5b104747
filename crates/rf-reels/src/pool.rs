//! Symbol pool: the multiset a spin draws from

use rand::Rng;

use crate::symbols::{Symbol, SymbolTable};

/// Flat multiset of symbol instances for one spin
///
/// Holds `weight` copies of every symbol. Draws remove exactly one instance
/// via swap-remove, so every remaining instance stays equally likely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// Expand a weight table into a pool
    pub fn build(table: &SymbolTable) -> Self {
        let mut symbols = Vec::with_capacity(table.total_weight());
        for (symbol, weight) in table.weights() {
            symbols.extend(std::iter::repeat_n(symbol, weight as usize));
        }
        Self { symbols }
    }

    /// Remove one instance chosen uniformly among the remaining ones
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Symbol> {
        if self.symbols.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.symbols.len());
        Some(self.symbols.swap_remove(idx))
    }

    /// Instances of `symbol` still in the pool
    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Expand a weight table into a fresh pool
pub fn build_pool(table: &SymbolTable) -> SymbolPool {
    SymbolPool::build(table)
}
