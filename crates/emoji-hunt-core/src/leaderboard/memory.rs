use crate::error::Result;
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore, upsert_max};

#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn record_attempt(&mut self, name: &str, score: u32) -> Result<bool> {
        Ok(upsert_max(&mut self.entries, name, score))
    }

    fn list(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }
}
