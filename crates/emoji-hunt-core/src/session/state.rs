use chrono::{DateTime, Utc};
use serde::Serialize;
use strum::{Display, IntoStaticStr};
use tokio::time::Instant;

use crate::config::session::ANONYMOUS_PLAYER;
use crate::pool::Symbol;
use crate::timer::RoundTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
pub enum SessionStatus {
    #[default]
    #[strum(serialize = "not started")]
    NotStarted,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "ended")]
    Ended,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Ended)
    }
}

/// Display name for a player; blank names become the anonymous label.
pub fn player_label(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ANONYMOUS_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub player: String,
    pub score: u32,
    pub found: u32,
    pub started_at: Instant,
    pub started_wall: DateTime<Utc>,
}

impl SessionState {
    pub fn new(player: &str, started_at: Instant) -> Self {
        Self {
            player: player_label(player),
            score: 0,
            found: 0,
            started_at,
            started_wall: Utc::now(),
        }
    }
}

/// The emoji currently asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub symbol: Symbol,
    pub set_at: Instant,
    /// Increases on every new target, across sessions
    pub round: u64,
}

/// Target context frozen when a snapshot is taken.
///
/// A tick's result is applied against this, never against whatever target
/// is active when the classification comes back.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureContext {
    pub tick: u64,
    pub round: u64,
    pub target: Symbol,
    pub target_set_at: Instant,
    pub captured_at: Instant,
}

impl CaptureContext {
    /// Seconds the target had been shown when the snapshot was taken
    pub fn elapsed_seconds(&self) -> f64 {
        RoundTimer::seconds_between(self.target_set_at, self.captured_at)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickStats {
    pub started: u64,
    /// Fired while a classification was still in flight
    pub skipped: u64,
    /// Capture, remote, or parse failure
    pub dropped: u64,
    pub matched: u64,
    pub missed: u64,
    pub unclear: u64,
    /// Resolved after the target had been skipped
    pub stale: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Matched {
        symbol: Symbol,
        points: u32,
        score: u32,
        found: u32,
        completed: bool,
    },
    Missed {
        guess: Symbol,
        target: Symbol,
    },
    Unclear,
    Stale {
        guess: Option<Symbol>,
    },
    Dropped {
        reason: String,
    },
    /// Session no longer active; nothing applied
    Discarded,
}

impl TickOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, TickOutcome::Matched { .. })
    }
}

/// Final result of a completed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub player: String,
    pub score: u32,
    pub found: u32,
    pub required: u32,
    pub duration_secs: f64,
    pub started_at: DateTime<Utc>,
    /// Best recorded score for the player after this session
    pub best: Option<u32>,
    pub rank: Option<usize>,
    pub new_best: bool,
    pub stats: TickStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_player_label() {
        assert_eq!(player_label("Bob"), "Bob");
        assert_eq!(player_label("  Alice "), "Alice");
        assert_eq!(player_label(""), ANONYMOUS_PLAYER);
        assert_eq!(player_label("   "), ANONYMOUS_PLAYER);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!SessionStatus::NotStarted.is_terminal());
        assert!(!SessionStatus::Active.is_terminal());
        assert!(SessionStatus::Completed.is_terminal());
        assert!(SessionStatus::Ended.is_terminal());
        assert_eq!(SessionStatus::NotStarted.to_string(), "not started");
    }

    #[test]
    fn test_context_elapsed() {
        let set_at = Instant::now();
        let context = CaptureContext {
            tick: 1,
            round: 1,
            target: Symbol::from("🍎"),
            target_set_at: set_at,
            captured_at: set_at + Duration::from_millis(2000),
        };
        assert_eq!(context.elapsed_seconds(), 2.0);
    }
}
