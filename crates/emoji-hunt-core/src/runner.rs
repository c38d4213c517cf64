//! Periodic capture-classify-score loop.
//!
//! One task drives the session. Each loop iteration waits, in priority order,
//! for:
//! 1. the shutdown signal
//! 2. a player command such as skip
//! 3. the classification in flight, if any
//! 4. the next tick
//!
//! Only one classification is in flight at a time; ticks firing meanwhile
//! are skipped by the session. A classification resolving at the same
//! instant as a tick is applied first, so that tick proceeds normally.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::capture::{Frame, FrameSource};
use crate::classify::{ClassificationResult, Classifier};
use crate::config::timing::TICK_INTERVAL_MS;
use crate::error::Result;
use crate::session::{CaptureContext, GameSession, SessionStatus};

type Pending = Pin<Box<dyn Future<Output = (CaptureContext, Result<ClassificationResult>)> + Send>>;

/// Player input accepted while a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerCommand {
    /// Replace the current target without scoring
    Skip,
}

pub struct SessionRunner<F, C> {
    session: GameSession,
    frames: F,
    classifier: Arc<C>,
    tick_interval: Duration,
    commands: Option<mpsc::Receiver<RunnerCommand>>,
}

impl<F, C> SessionRunner<F, C>
where
    F: FrameSource,
    C: Classifier,
{
    pub fn new(session: GameSession, frames: F, classifier: C) -> Self {
        Self {
            session,
            frames,
            classifier: Arc::new(classifier),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            commands: None,
        }
    }

    /// Accept player commands from `commands` during `run`.
    pub fn with_commands(mut self, commands: mpsc::Receiver<RunnerCommand>) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Play one session for `player` until it completes or `shutdown` fires.
    ///
    /// A closed shutdown channel counts as a shutdown request.
    pub async fn run(
        &mut self,
        player: &str,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<SessionStatus> {
        self.session.initialize(player)?;

        info!("Starting capture loop (every {:?})...", self.tick_interval);

        let first_tick = Instant::now() + self.tick_interval;
        let mut ticker = interval_at(first_tick, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut pending: Option<Pending> = None;
        let mut commands = self.commands.take();
        let mut stop_requested = *shutdown.borrow();

        while !stop_requested && self.session.status() == SessionStatus::Active {
            tokio::select! {
                biased;

                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Shutdown requested, stopping session");
                        stop_requested = true;
                    }
                }

                command = next_command(&mut commands), if commands.is_some() => {
                    match command {
                        Some(command) => self.apply_command(command),
                        None => {
                            debug!("Command channel closed");
                            commands = None;
                        }
                    }
                }

                Some((context, result)) = async { Some(pending.as_mut()?.await) }, if pending.is_some() => {
                    pending = None;
                    let outcome = self.session.resolve_tick(context, result);
                    debug!("Tick resolved: {:?}", outcome);
                }

                _ = ticker.tick() => {
                    if let Some(context) = self.session.begin_tick() {
                        match self.frames.capture() {
                            Ok(frame) => pending = Some(self.dispatch(context, frame)),
                            Err(e) => {
                                self.session.resolve_tick(context, Err(e));
                            }
                        }
                    }
                }
            }
        }

        // Dropping the future cancels the request; its result is never applied
        if pending.take().is_some() {
            debug!("Discarding classification still in flight");
        }
        self.commands = commands;
        self.session.teardown();
        self.report();

        Ok(self.session.status())
    }

    fn apply_command(&mut self, command: RunnerCommand) {
        match command {
            RunnerCommand::Skip => match self.session.skip() {
                Ok(target) => info!("Target skipped, now looking for {}", target),
                Err(e) => debug!("Skip ignored: {}", e),
            },
        }
    }

    fn dispatch(&self, context: CaptureContext, frame: Frame) -> Pending {
        let classifier = Arc::clone(&self.classifier);
        Box::pin(async move {
            let result = classifier.classify(frame).await;
            (context, result)
        })
    }

    fn report(&self) {
        let stats = self.session.stats();
        info!(
            "Capture loop stopped: {} tick(s), {} match(es)",
            stats.started, stats.matched
        );

        if stats.dropped > 0 {
            warn!(
                "{} tick(s) dropped after capture or classification failures",
                stats.dropped
            );
        }
        if stats.skipped > 0 {
            info!(
                "{} tick(s) skipped while a classification was in flight",
                stats.skipped
            );
        }
    }
}

async fn next_command(
    commands: &mut Option<mpsc::Receiver<RunnerCommand>>,
) -> Option<RunnerCommand> {
    match commands {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
