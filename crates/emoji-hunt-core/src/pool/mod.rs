//! Target emoji pool and selection.

mod selector;
mod symbol;

pub use selector::*;
pub use symbol::Symbol;

/// Everyday objects a player can usually find at home.
pub const DEFAULT_POOL: [&str; 20] = [
    "🍎", "🍌", "🥕", "📱", "🔑", "👓", "☕", "📚", "✏️", "🧦", "👟", "🥄", "⌚", "💡", "🧸",
    "🎧", "🖱️", "🪥", "🧴", "🕯️",
];
