use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Error, Result};
use crate::pool::Symbol;

/// Fixed, ordered set of distinct target symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPool {
    symbols: Vec<Symbol>,
}

impl EmojiPool {
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(Error::InvalidPool("pool must contain at least one symbol".to_string()));
        }

        let mut seen = HashSet::new();
        for symbol in &symbols {
            if !seen.insert(symbol.normalized()) {
                return Err(Error::InvalidPool(format!("duplicate symbol {}", symbol)));
            }
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.iter().any(|s| s.matches(symbol))
    }
}

impl Default for EmojiPool {
    fn default() -> Self {
        Self {
            symbols: super::DEFAULT_POOL.iter().map(|s| Symbol::from(*s)).collect(),
        }
    }
}

/// Symbols already shown since the last full-cycle reset.
#[derive(Debug, Clone, Default)]
pub struct UsedPool {
    seen: HashSet<Symbol>,
}

impl UsedPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.seen.contains(symbol)
    }

    pub fn insert(&mut self, symbol: Symbol) -> bool {
        self.seen.insert(symbol)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// True when every symbol of `pool` has been shown.
    pub fn covers(&self, pool: &EmojiPool) -> bool {
        pool.symbols().iter().all(|s| self.seen.contains(s))
    }
}

/// Pick the next target, avoiding repeats until the pool is exhausted.
///
/// When `used` already covers the pool it is cleared first, and the draw is
/// made from the full pool. The chosen symbol is always added to `used`.
pub fn select_next<R: Rng>(pool: &EmojiPool, used: &mut UsedPool, rng: &mut R) -> Symbol {
    let symbols = pool.symbols();

    if used.covers(pool) {
        debug!("All {} symbols used, starting a new cycle", pool.len());
        used.clear();
    }

    // Terminates: at least one symbol of the pool is unused here
    let chosen = loop {
        let candidate = &symbols[rng.random_range(0..symbols.len())];
        if !used.contains(candidate) {
            break candidate.clone();
        }
    };

    used.insert(chosen.clone());
    chosen
}

/// Pool, used-set, and RNG bundled for the session controller.
#[derive(Debug, Clone)]
pub struct EmojiSelector {
    pool: EmojiPool,
    used: UsedPool,
    rng: StdRng,
}

impl EmojiSelector {
    pub fn new(pool: EmojiPool) -> Self {
        Self {
            pool,
            used: UsedPool::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector for replays and tests
    pub fn with_seed(pool: EmojiPool, seed: u64) -> Self {
        Self {
            pool,
            used: UsedPool::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next(&mut self) -> Symbol {
        select_next(&self.pool, &mut self.used, &mut self.rng)
    }

    pub fn pool(&self) -> &EmojiPool {
        &self.pool
    }

    pub fn used(&self) -> &UsedPool {
        &self.used
    }
}
