//! Pluggable randomness for everything the service fabricates.
//!
//! Handlers ask an [`Entropy`] for a fresh RNG per request and never keep it
//! around, so no random state is shared between requests in production.

use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// Shared handle stored in the router extensions.
pub type SharedEntropy = Arc<dyn Entropy>;

/// Source of per-request random number generators.
pub trait Entropy: Send + Sync + fmt::Debug {
    /// Hand out a generator for a single unit of work.
    fn rng(&self) -> Box<dyn RngCore + Send>;
}

/// OS-seeded generator, a new one for every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(StdRng::from_entropy())
    }
}

/// Reproducible source: every handed-out generator is seeded from a master
/// RNG, so the sequence of results only depends on the initial seed and the
/// order of calls.
pub struct SeededEntropy {
    seed: u64,
    master: Mutex<StdRng>,
}

impl SeededEntropy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            master: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for SeededEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededEntropy")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Entropy for SeededEntropy {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        let child_seed = self
            .master
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64();
        Box::new(StdRng::seed_from_u64(child_seed))
    }
}

/// Pick the production source, or a seeded one when a seed is configured.
#[must_use]
pub fn from_seed(seed: Option<u64>) -> SharedEntropy {
    match seed {
        Some(seed) => Arc::new(SeededEntropy::new(seed)),
        None => Arc::new(OsEntropy),
    }
}
