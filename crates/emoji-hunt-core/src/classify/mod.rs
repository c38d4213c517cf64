//! Remote emoji classification.

mod http;
mod mock;

pub use http::{ClassifyResponse, HttpClassifier, ServiceErrorBody};
pub use mock::ScriptedClassifier;

use std::future::Future;

use crate::capture::Frame;
use crate::config::session::UNCLEAR_SENTINEL;
use crate::error::Result;
use crate::pool::Symbol;

/// Longest answer (in chars) still accepted as one emoji.
///
/// ZWJ sequences such as "👩‍🚀" or flag pairs span several chars.
const MAX_SYMBOL_CHARS: usize = 8;

/// A successful classification.
///
/// Transport and service failures are `Err(Error)`, never a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResult {
    Symbol(Symbol),
    /// The model could not name a single object
    Unclear,
}

impl ClassificationResult {
    /// Interpret a raw model answer.
    pub fn from_answer(answer: &str) -> Self {
        let answer = answer.trim();
        if answer.is_empty() || answer == UNCLEAR_SENTINEL || !looks_like_single_emoji(answer) {
            return ClassificationResult::Unclear;
        }
        ClassificationResult::Symbol(Symbol::new(answer))
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            ClassificationResult::Symbol(symbol) => Some(symbol),
            ClassificationResult::Unclear => None,
        }
    }

    pub fn is_unclear(&self) -> bool {
        matches!(self, ClassificationResult::Unclear)
    }
}

/// The model is told to answer with a lone emoji; prose means it failed to.
///
/// ASCII is only accepted as a keycap base (`1️⃣`, `#️⃣`, `*️⃣`).
fn looks_like_single_emoji(answer: &str) -> bool {
    let chars: Vec<char> = answer.chars().collect();
    if chars.len() > MAX_SYMBOL_CHARS {
        return false;
    }

    chars.iter().enumerate().all(|(i, &c)| {
        if c.is_whitespace() {
            false
        } else if c.is_ascii() {
            is_keycap_base(c) && matches!(chars.get(i + 1), Some('\u{FE0F}' | '\u{20E3}'))
        } else {
            true
        }
    })
}

fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Turns a camera frame into an emoji guess.
pub trait Classifier: Send + Sync + 'static {
    fn classify(&self, frame: Frame) -> impl Future<Output = Result<ClassificationResult>> + Send;
}
