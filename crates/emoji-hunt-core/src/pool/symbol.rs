use std::fmt;

use serde::{Deserialize, Serialize};

const VARIATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

/// An emoji symbol as shown to the player or returned by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison key: trimmed, without emoji variation selectors.
    ///
    /// Vision models add or drop U+FE0F freely ("✏" vs "✏️").
    pub fn normalized(&self) -> String {
        self.0
            .trim()
            .chars()
            .filter(|c| !VARIATION_SELECTORS.contains(c))
            .collect()
    }

    pub fn matches(&self, other: &Symbol) -> bool {
        self.normalized() == other.normalized()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}
