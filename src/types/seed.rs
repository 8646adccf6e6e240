//! Seeding for the random number generator.

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// How a sampling run obtains its randomness.
///
/// A seeded run is reproducible: the same seed and parameters give
/// bit-identical samples. An unseeded run draws its state from OS entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    Seeded(u64),
    #[default]
    Unseeded,
}

impl Seed {
    /// Build a fresh generator for one logical run.
    pub fn rng(self) -> Pcg64 {
        match self {
            Seed::Seeded(s) => Pcg64::seed_from_u64(s),
            Seed::Unseeded => Pcg64::from_entropy(),
        }
    }

    #[inline]
    pub fn is_seeded(self) -> bool {
        matches!(self, Seed::Seeded(_))
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Seed::Seeded(s),
            None => Seed::Unseeded,
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Seed::Seeded(seed)
    }
}
