//! Configuration and game constants.
//!
//! This module contains:
//! - `GameSettings` - TOML-backed runtime settings
//! - Tick timing, scoring, and session constants of the reference game

mod settings;

pub use settings::*;

/// Capture tick configuration.
pub mod timing {
    /// Period (in ms) between two capture ticks.
    pub const TICK_INTERVAL_MS: u64 = 4000;

    /// Timeout (in seconds) for one classification request.
    pub const CLASSIFY_TIMEOUT_SECS: u64 = 30;
}

/// Scoring configuration.
///
/// points = max(MIN_POINTS, MAX_POINTS - floor(elapsed_secs * DECAY_PER_SECOND))
pub mod scoring {
    /// Points for a match found instantly.
    pub const MAX_POINTS: u32 = 100;

    /// Floor for slow matches.
    pub const MIN_POINTS: u32 = 10;

    /// Points lost per elapsed second.
    pub const DECAY_PER_SECOND: f64 = 10.0;
}

/// Session configuration.
pub mod session {
    /// Targets to find before the session completes.
    pub const REQUIRED_FINDS: u32 = 5;

    /// Player label used when no name is given.
    pub const ANONYMOUS_PLAYER: &str = "Anonymous";

    /// Classifier answer meaning "no confident single object".
    pub const UNCLEAR_SENTINEL: &str = "?";
}
