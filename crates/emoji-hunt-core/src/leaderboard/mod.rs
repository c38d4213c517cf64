//! Best score per player.
//!
//! - `LeaderboardStore` - the upsert-max/list contract the session consumes
//! - `MemoryLeaderboard` - in-process store
//! - `JsonLeaderboard` - file-backed store using the browser's `[{name, score}]` layout

mod json;
mod memory;

pub use json::JsonLeaderboard;
pub use memory::MemoryLeaderboard;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTime<Utc>>,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            achieved_at: None,
        }
    }

    /// Keep the better score. Returns true if `score` replaced the old one.
    pub fn update(&mut self, score: u32) -> bool {
        if score > self.score {
            self.score = score;
            self.achieved_at = Some(Utc::now());
            return true;
        }
        false
    }
}

pub trait LeaderboardStore: Send {
    /// Record a finished session; only a strictly greater score overwrites.
    ///
    /// Returns true when the stored standings changed.
    fn record_attempt(&mut self, name: &str, score: u32) -> Result<bool>;

    /// Standings, best score first.
    fn list(&self) -> Vec<LeaderboardEntry>;

    fn best(&self, name: &str) -> Option<u32> {
        self.list().into_iter().find(|e| e.name == name).map(|e| e.score)
    }

    /// 1-based position of `name` in the standings
    fn rank(&self, name: &str) -> Option<usize> {
        self.list().iter().position(|e| e.name == name).map(|i| i + 1)
    }
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for Box<S> {
    fn record_attempt(&mut self, name: &str, score: u32) -> Result<bool> {
        (**self).record_attempt(name, score)
    }

    fn list(&self) -> Vec<LeaderboardEntry> {
        (**self).list()
    }
}

/// Upsert-max into a standings vector and keep it sorted.
///
/// Equal scores keep their existing order.
pub(crate) fn upsert_max(entries: &mut Vec<LeaderboardEntry>, name: &str, score: u32) -> bool {
    let changed = match entries.iter_mut().find(|e| e.name == name) {
        Some(existing) => existing.update(score),
        None => {
            entries.push(LeaderboardEntry {
                name: name.to_string(),
                score,
                achieved_at: Some(Utc::now()),
            });
            true
        }
    };

    if changed {
        sort_standings(entries);
    }
    changed
}

pub(crate) fn sort_standings(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_update_keeps_max() {
        let mut entry = LeaderboardEntry::new("Alice", 120);
        assert!(!entry.update(90));
        assert_eq!(entry.score, 120);
        assert!(!entry.update(120));
        assert!(entry.update(150));
        assert_eq!(entry.score, 150);
        assert!(entry.achieved_at.is_some());
    }

    #[test]
    fn test_upsert_max_sorts_descending() {
        let mut entries = Vec::new();
        upsert_max(&mut entries, "Alice", 120);
        upsert_max(&mut entries, "Bob", 200);
        upsert_max(&mut entries, "Carol", 50);

        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Alice", "Carol"]);

        upsert_max(&mut entries, "Carol", 300);
        assert_eq!(entries[0].name, "Carol");
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut entries = Vec::new();
        upsert_max(&mut entries, "First", 100);
        upsert_max(&mut entries, "Second", 100);
        assert_eq!(entries[0].name, "First");
        assert_eq!(entries[1].name, "Second");
    }

    #[test]
    fn test_entry_json_layout() {
        let json = serde_json::to_string(&LeaderboardEntry::new("Bob", 130)).unwrap();
        assert_eq!(json, r#"{"name":"Bob","score":130}"#);

        let parsed: LeaderboardEntry = serde_json::from_str(r#"{"name":"Eve","score":7}"#).unwrap();
        assert_eq!(parsed, LeaderboardEntry::new("Eve", 7));
    }
}
