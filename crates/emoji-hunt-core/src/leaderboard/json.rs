use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore, sort_standings, upsert_max};

/// Leaderboard persisted as a JSON array, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonLeaderboard {
    path: PathBuf,
    entries: Vec<LeaderboardEntry>,
}

impl JsonLeaderboard {
    /// Open the board at `path`; a missing file is an empty board.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                fold_duplicates(serde_json::from_str(&content)?)
            }
        } else {
            Vec::new()
        };

        debug!("Loaded {} leaderboard entries from {:?}", entries.len(), path);
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

/// One entry per name, keeping the best score.
fn fold_duplicates(loaded: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(loaded.len());
    for entry in loaded {
        match entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) if entry.score > existing.score => *existing = entry,
            Some(_) => {}
            None => entries.push(entry),
        }
    }
    sort_standings(&mut entries);
    entries
}

impl LeaderboardStore for JsonLeaderboard {
    /// In-memory standings only change once the file write succeeds.
    fn record_attempt(&mut self, name: &str, score: u32) -> Result<bool> {
        let mut updated = self.entries.clone();
        if !upsert_max(&mut updated, name, score) {
            return Ok(false);
        }
        self.save(&updated)?;
        self.entries = updated;
        Ok(true)
    }

    fn list(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let board = JsonLeaderboard::open(temp.path().join("leaderboard.json")).unwrap();
        assert!(board.list().is_empty());
    }

    #[test]
    fn test_record_persists_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("leaderboard.json");

        let mut board = JsonLeaderboard::open(&path).unwrap();
        board.record_attempt("Alice", 120).unwrap();
        board.record_attempt("Bob", 200).unwrap();
        board.record_attempt("Alice", 90).unwrap();

        let reopened = JsonLeaderboard::open(&path).unwrap();
        let standings: Vec<_> = reopened
            .list()
            .into_iter()
            .map(|e| (e.name, e.score))
            .collect();
        assert_eq!(
            standings,
            vec![("Bob".to_string(), 200), ("Alice".to_string(), 120)]
        );
    }

    #[test]
    fn test_reads_browser_layout_unsorted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leaderboard.json");
        fs::write(
            &path,
            r#"[{"name":"Low","score":10},{"name":"High","score":400}]"#,
        )
        .unwrap();

        let board = JsonLeaderboard::open(&path).unwrap();
        assert_eq!(board.list()[0].name, "High");
        assert_eq!(board.rank("Low"), Some(2));
    }

    #[test]
    fn test_unchanged_attempt_does_not_rewrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leaderboard.json");

        let mut board = JsonLeaderboard::open(&path).unwrap();
        assert!(!path.exists());
        board.record_attempt("Alice", 50).unwrap();
        fs::write(&path, "[]").unwrap();

        // Lower score: nothing to write, the file stays as is
        assert!(!board.record_attempt("Alice", 40).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_failed_write_keeps_previous_standings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leaderboard.json");

        let mut board = JsonLeaderboard::open(&path).unwrap();
        board.record_attempt("Alice", 50).unwrap();

        // A directory in place of the file makes the next write fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(board.record_attempt("Alice", 120).is_err());
        assert_eq!(board.best("Alice"), Some(50));
        assert!(board.record_attempt("Bob", 80).is_err());
        assert_eq!(board.best("Bob"), None);
        assert_eq!(board.list().len(), 1);
    }

    #[test]
    fn test_open_folds_duplicate_names() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leaderboard.json");
        fs::write(
            &path,
            r#"[{"name":"Alice","score":90},{"name":"Bob","score":100},{"name":"Alice","score":150},{"name":"Alice","score":20}]"#,
        )
        .unwrap();

        let board = JsonLeaderboard::open(&path).unwrap();
        let standings: Vec<_> = board
            .list()
            .into_iter()
            .map(|e| (e.name, e.score))
            .collect();
        assert_eq!(
            standings,
            vec![("Alice".to_string(), 150), ("Bob".to_string(), 100)]
        );
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("leaderboard.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonLeaderboard::open(&path).unwrap_err();
        assert!(matches!(err, crate::error::Error::Json(_)));
    }
}
