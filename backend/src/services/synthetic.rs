//! Random source for synthetic fallback data
//!
//! One generator is shared by every adapter. Seed it through
//! `synthetic.seed` to make the fallback path reproducible.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SyntheticRng {
    rng: Mutex<StdRng>,
}

impl SyntheticRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Run `f` with exclusive access to the generator. Never hold across an await.
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl Default for SyntheticRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Drop precision beyond two decimals without leaving the half-open range
pub(crate) fn floor2(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
