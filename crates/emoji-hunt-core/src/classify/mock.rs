//! Scripted classifier for testing
//!
//! Replays queued answers instead of calling a real model, optionally after
//! a delay so tests can exercise in-flight requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::capture::Frame;
use crate::classify::{ClassificationResult, Classifier};
use crate::error::{Error, Result};
use crate::pool::Symbol;

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<ClassificationResult>>,
    frames: Vec<Frame>,
}

/// Classifier answering from a queue.
///
/// Once the queue is empty every call answers `Unclear`. Clones share the
/// same queue, so a test can keep a handle after moving one into a runner.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClassifier {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call only after `delay` (tokio time)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, response: Result<ClassificationResult>) -> &Self {
        self.lock().responses.push_back(response);
        self
    }

    pub fn push_symbol(&self, symbol: impl Into<Symbol>) -> &Self {
        self.push(Ok(ClassificationResult::Symbol(symbol.into())))
    }

    pub fn push_unclear(&self) -> &Self {
        self.push(Ok(ClassificationResult::Unclear))
    }

    pub fn push_remote_error(&self, message: &str) -> &Self {
        self.push(Err(Error::remote(message)))
    }

    /// Frames received so far
    pub fn calls(&self) -> usize {
        self.lock().frames.len()
    }

    pub fn pending(&self) -> usize {
        self.lock().responses.len()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.lock().frames.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Classifier for ScriptedClassifier {
    async fn classify(&self, frame: Frame) -> Result<ClassificationResult> {
        let response = {
            let mut script = self.lock();
            script.frames.push(frame);
            script
                .responses
                .pop_front()
                .unwrap_or(Ok(ClassificationResult::Unclear))
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_then_unclear() {
        let classifier = ScriptedClassifier::new();
        classifier.push_symbol("🍎").push_remote_error("down");

        let frame = Frame::from_payload("data:image/png;base64,AA==");
        assert_eq!(
            classifier.classify(frame.clone()).await.unwrap(),
            ClassificationResult::Symbol(Symbol::from("🍎"))
        );
        assert!(classifier.classify(frame.clone()).await.is_err());
        assert!(classifier.classify(frame).await.unwrap().is_unclear());
        assert_eq!(classifier.calls(), 3);
        assert_eq!(classifier.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_uses_tokio_time() {
        let classifier = ScriptedClassifier::new().with_delay(Duration::from_secs(3));
        classifier.push_unclear();

        let start = tokio::time::Instant::now();
        classifier
            .classify(Frame::from_payload("x"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
