//! Random source construction

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used by the machine and simulator
pub type SlotRng = ChaCha8Rng;

/// Seeded generator when `seed` is given, OS entropy otherwise
pub fn seeded_rng(seed: Option<u64>) -> SlotRng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_os_rng(),
    }
}
