use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{
    Rng,
    SeedableRng,
};

pub const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 10; SM-G970F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.120 Mobile Safari/537.36",
];

/// Picks one User-Agent uniformly at random from `pool`.
///
/// Falls back to the first entry of [`USER_AGENTS`] when `pool` is empty.
pub fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}

/// Rotating User-Agent source shared by all lookups.
///
/// Holds only the random generator; no request data passes through it.
pub struct UserAgentPool {
    agents: Vec<&'static str>,
    rng: Mutex<StdRng>,
}

impl UserAgentPool {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            agents: USER_AGENTS.to_vec(),
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn next(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        pick(&self.agents, &mut *rng)
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::new()
    }
}
