use strum::{Display, IntoStaticStr};

use crate::classify::ClassificationResult;
use crate::pool::Symbol;
use crate::session::SessionSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum TargetChangeReason {
    #[strum(serialize = "initial")]
    Initial,
    #[strum(serialize = "found")]
    Found,
    #[strum(serialize = "skipped")]
    Skipped,
}

/// Notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted {
        player: String,
        required: u32,
    },
    TargetChanged {
        target: Symbol,
        reason: TargetChangeReason,
        round: u64,
    },
    /// What the classifier saw on a tick that did not score
    Guess {
        guess: ClassificationResult,
        target: Symbol,
        stale: bool,
    },
    Matched {
        symbol: Symbol,
        points: u32,
        score: u32,
        found: u32,
        required: u32,
        elapsed_secs: f64,
    },
    TickSkipped {
        tick: u64,
        in_flight: u64,
    },
    TickDropped {
        tick: u64,
        reason: String,
    },
    Completed(SessionSummary),
    SessionEnded {
        score: u32,
        found: u32,
    },
}

impl GameEvent {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::SessionStarted { .. } => "session_started",
            GameEvent::TargetChanged { .. } => "target_changed",
            GameEvent::Guess { .. } => "guess",
            GameEvent::Matched { .. } => "matched",
            GameEvent::TickSkipped { .. } => "tick_skipped",
            GameEvent::TickDropped { .. } => "tick_dropped",
            GameEvent::Completed(_) => "completed",
            GameEvent::SessionEnded { .. } => "session_ended",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Completed(_) | GameEvent::SessionEnded { .. })
    }
}
