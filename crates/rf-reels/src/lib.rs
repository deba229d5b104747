//! # rf-reels - Classic line slot core
//!
//! Draws a reel grid without replacement from a weighted symbol pool and
//! pays straight horizontal lines against per-symbol multipliers.
//!
//! ## Features
//!
//! - **Symbol Pool**: expands a weight table into a flat multiset per spin
//! - **Reel Engine**: samples the whole grid without replacement
//! - **Payline Evaluation**: fixed-point payouts, duplicate lines pay independently
//! - **Round Orchestration**: pool → draw → evaluate → net, stateless between rounds
//! - **Simulation**: seeded batch play with session statistics
//!
//! ## Architecture
//!
//! ```text
//! SlotMachine
//!     │
//!     ├── ReelEngine (GridSpec + SymbolTable weights)
//!     │       └── SymbolPool (rebuilt every spin)
//!     ├── PayTable (SymbolTable values)
//!     └── BetLimits
//!           │
//!           v
//!     Wager → RoundResult { grid, winnings, winning_lines, net }
//! ```

pub mod bet;
pub mod config;
pub mod error;
pub mod grid;
pub mod line;
pub mod paytable;
pub mod pool;
pub mod reel;
pub mod rng;
pub mod round;
pub mod simulation;
pub mod stats;
pub mod symbols;

pub use bet::*;
pub use config::*;
pub use error::*;
pub use grid::*;
pub use line::*;
pub use paytable::*;
pub use pool::*;
pub use reel::*;
pub use rng::*;
pub use round::*;
pub use simulation::*;
pub use stats::*;
pub use symbols::*;

/// Monetary amount. Fixed-point end to end; never converted to `f64` for arithmetic.
pub type Money = rust_decimal::Decimal;
