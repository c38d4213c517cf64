pub mod capture;
pub mod classify;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod observer;
pub mod pool;
pub mod runner;
pub mod score;
pub mod session;
pub mod timer;

pub use capture::{DirectoryFrames, Frame, FrameSource};
pub use classify::{ClassificationResult, Classifier, HttpClassifier, ScriptedClassifier};
pub use config::{ClassifierSettings, GameSettings};
pub use error::{Error, Result};
pub use leaderboard::{JsonLeaderboard, LeaderboardEntry, LeaderboardStore, MemoryLeaderboard};
pub use observer::{ConsoleObserver, EventLog, SessionObserver};
pub use pool::{EmojiPool, EmojiSelector, Symbol, UsedPool, select_next};
pub use runner::{RunnerCommand, SessionRunner};
pub use score::{accumulate, points_for};
pub use session::{
    CaptureContext, GameEvent, GameSession, SessionState, SessionStatus, SessionSummary,
    TargetChangeReason, TickOutcome, TickStats,
};
pub use timer::{Clock, ManualClock, RoundTimer, SystemClock};
