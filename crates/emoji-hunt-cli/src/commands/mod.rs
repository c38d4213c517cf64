//! CLI command implementations.

pub mod classify;
pub mod leaderboard;
pub mod play;
pub mod pool;
