//! Reel engine: draws a grid without replacement

use rand::Rng;

use crate::error::ConfigError;
use crate::grid::{Grid, GridSpec};
use crate::pool::SymbolPool;
use crate::symbols::SymbolTable;

/// Draws grids from a weighted symbol table
///
/// Each spin rebuilds the pool and samples every position of the grid from
/// it without replacement, so no symbol can appear more often across the
/// whole grid than its weight allows. The grid fits the pool; that is
/// checked once in [`ReelEngine::new`].
#[derive(Debug, Clone)]
pub struct ReelEngine {
    spec: GridSpec,
    table: SymbolTable,
}

impl ReelEngine {
    /// Build an engine, rejecting grids the pool can't fill
    pub fn new(spec: GridSpec, table: SymbolTable) -> Result<Self, ConfigError> {
        spec.check_capacity(table.total_weight())?;
        log::info!(
            "Reel engine ready: {}×{} grid, {} symbols, pool of {}",
            spec.reels,
            spec.rows,
            table.len(),
            table.total_weight()
        );
        Ok(Self { spec, table })
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Draw one grid
    ///
    /// Fails with [`ConfigError::GridTooLarge`] if the pool runs dry, which
    /// [`ReelEngine::new`] rules out.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, ConfigError> {
        let mut pool = SymbolPool::build(&self.table);
        let mut columns = Vec::with_capacity(self.spec.reels);

        for _ in 0..self.spec.reels {
            let mut column = Vec::with_capacity(self.spec.rows);
            for _ in 0..self.spec.rows {
                let symbol = pool.draw(rng).ok_or_else(|| self.exhausted())?;
                column.push(symbol);
            }
            columns.push(column);
        }

        log::debug!("Spun {}×{}, {} left in pool", self.spec.reels, self.spec.rows, pool.len());
        Ok(Grid::from_columns_unchecked(columns))
    }

    fn exhausted(&self) -> ConfigError {
        log::error!("Symbol pool ran dry mid-spin");
        ConfigError::GridTooLarge {
            required: self.spec.total_positions().unwrap_or(usize::MAX),
            available: self.table.total_weight(),
        }
    }
}

/// One-shot spin: validate, then draw
///
/// The size check runs before `rng` is touched.
pub fn spin<R: Rng + ?Sized>(
    rows: usize,
    reels: usize,
    table: &SymbolTable,
    rng: &mut R,
) -> Result<Grid, ConfigError> {
    let engine = ReelEngine::new(GridSpec::new(reels, rows), table.clone())?;
    engine.spin(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_grid_shape() {
        let engine = ReelEngine::new(GridSpec::new(4, 2), SymbolTable::classic()).unwrap();
        let mut rng = StdRng::seed_from_u64(12345);

        let grid = engine.spin(&mut rng).unwrap();
        assert_eq!(grid.reels(), 4);
        assert_eq!(grid.rows(), 2);
        assert!(grid.columns().iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_no_replacement_across_grid() {
        let table = SymbolTable::classic();
        let engine = ReelEngine::new(GridSpec::classic_3x3(), table.clone()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..2_000 {
            let grid = engine.spin(&mut rng).unwrap();
            for (symbol, weight) in table.weights() {
                assert!(grid.count(symbol) <= weight as usize);
            }
        }
    }

    #[test]
    fn test_full_pool_uses_every_instance() {
        // 2×5 = 10 = total weight: every instance must be drawn exactly once
        let table = SymbolTable::classic();
        let engine = ReelEngine::new(GridSpec::new(2, 5), table.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let grid = engine.spin(&mut rng).unwrap();
        for (symbol, weight) in table.weights() {
            assert_eq!(grid.count(symbol), weight as usize);
        }
    }

    #[test]
    fn test_seeded_spins_repeat() {
        let engine = ReelEngine::new(GridSpec::classic_3x3(), SymbolTable::classic()).unwrap();

        let mut a = ChaCha8Rng::seed_from_u64(2024);
        let mut b = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..50 {
            assert_eq!(engine.spin(&mut a).unwrap(), engine.spin(&mut b).unwrap());
        }
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = ReelEngine::new(GridSpec::new(10, 10), SymbolTable::classic()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GridTooLarge {
                required: 100,
                available: 10
            }
        ));
    }

    #[test]
    fn test_dry_pool_fails_instead_of_short_grid() {
        // Bypasses the capacity check in `new`
        let engine = ReelEngine {
            spec: GridSpec::new(4, 4),
            table: SymbolTable::classic(),
        };
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(
            engine.spin(&mut rng),
            Err(ConfigError::GridTooLarge {
                required: 16,
                available: 10
            })
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let none: [(crate::symbols::Symbol, u32); 0] = [];
        let table = SymbolTable::new(none, none).unwrap();
        assert!(ReelEngine::new(GridSpec::classic_3x3(), table).is_err());
    }

    #[test]
    fn test_one_shot_spin() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = spin(3, 3, &SymbolTable::classic(), &mut rng).unwrap();
        assert_eq!(grid.reels(), 3);
        assert_eq!(grid.rows(), 3);

        assert!(spin(10, 10, &SymbolTable::classic(), &mut rng).is_err());
    }
}
