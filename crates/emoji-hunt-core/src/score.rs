//! Time-decayed scoring.

use crate::config::scoring::{DECAY_PER_SECOND, MAX_POINTS, MIN_POINTS};

/// Points for a match found `elapsed_secs` after the target was set.
///
/// `max(10, 100 - floor(elapsed_secs * 10))`; negative and NaN inputs count as 0.
pub fn points_for(elapsed_secs: f64) -> u32 {
    let elapsed = if elapsed_secs.is_nan() {
        0.0
    } else {
        elapsed_secs.max(0.0)
    };

    let decay = (elapsed * DECAY_PER_SECOND).floor();
    if decay >= (MAX_POINTS - MIN_POINTS) as f64 {
        return MIN_POINTS;
    }
    (MAX_POINTS - decay as u32).max(MIN_POINTS)
}

/// Add `points` to `current`; the total never decreases.
pub fn accumulate(current: u32, points: u32) -> u32 {
    current.saturating_add(points)
}
