use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classify::ClassificationResult;
use crate::config::GameSettings;
use crate::config::session::REQUIRED_FINDS;
use crate::error::{Error, Result};
use crate::leaderboard::LeaderboardStore;
use crate::observer::SessionObserver;
use crate::pool::{EmojiPool, EmojiSelector, Symbol};
use crate::score::{accumulate, points_for};
use crate::session::{
    CaptureContext, GameEvent, SessionState, SessionStatus, SessionSummary, Target,
    TargetChangeReason, TickOutcome, TickStats,
};
use crate::timer::{Clock, RoundTimer};

/// Drives one player's hunt: targets, ticks, scoring, and completion.
pub struct GameSession {
    selector: EmojiSelector,
    timer: RoundTimer,
    required: u32,
    leaderboard: Box<dyn LeaderboardStore>,
    observers: Vec<Box<dyn SessionObserver>>,
    status: SessionStatus,
    state: SessionState,
    target: Option<Target>,
    last_round: u64,
    last_tick: u64,
    /// Tick whose classification has not resolved yet
    in_flight: Option<u64>,
    stats: TickStats,
    summary: Option<SessionSummary>,
}

impl GameSession {
    pub fn new(selector: EmojiSelector, leaderboard: Box<dyn LeaderboardStore>) -> Self {
        let timer = RoundTimer::default();
        let state = SessionState::new("", timer.now());
        Self {
            selector,
            timer,
            required: REQUIRED_FINDS,
            leaderboard,
            observers: Vec::new(),
            status: SessionStatus::NotStarted,
            state,
            target: None,
            last_round: 0,
            last_tick: 0,
            in_flight: None,
            stats: TickStats::default(),
            summary: None,
        }
    }

    /// Build a session from settings; `seed` makes target order reproducible.
    pub fn from_settings(
        settings: &GameSettings,
        leaderboard: Box<dyn LeaderboardStore>,
        seed: Option<u64>,
    ) -> Result<Self> {
        settings.validate()?;
        let pool = EmojiPool::new(settings.pool.iter().map(String::as_str))?;
        let selector = match seed {
            Some(seed) => EmojiSelector::with_seed(pool, seed),
            None => EmojiSelector::new(pool),
        };
        Ok(Self::new(selector, leaderboard).with_required_finds(settings.required_finds))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.timer = RoundTimer::new(clock);
        self.state.started_at = self.timer.now();
        self
    }

    pub fn with_required_finds(mut self, required: u32) -> Self {
        self.required = required.max(1);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Start a session for `player` and show the first target.
    pub fn initialize(&mut self, player: &str) -> Result<Symbol> {
        if self.status == SessionStatus::Active {
            return Err(Error::InvalidState(
                "session is already active".to_string(),
            ));
        }

        self.state = SessionState::new(player, self.timer.now());
        self.stats = TickStats::default();
        self.summary = None;
        self.in_flight = None;
        self.status = SessionStatus::Active;

        info!(
            "Session started for {} ({} finds required)",
            self.state.player, self.required
        );
        self.emit(GameEvent::SessionStarted {
            player: self.state.player.clone(),
            required: self.required,
        });

        Ok(self.advance_target(TargetChangeReason::Initial))
    }

    /// Open a capture tick.
    ///
    /// Returns `None` when the session is not active, or when the previous
    /// tick is still waiting for its classification (the tick is skipped).
    pub fn begin_tick(&mut self) -> Option<CaptureContext> {
        if self.status != SessionStatus::Active {
            return None;
        }

        self.last_tick += 1;
        let tick = self.last_tick;

        if let Some(in_flight) = self.in_flight {
            self.stats.skipped += 1;
            debug!("Tick {} skipped, tick {} still in flight", tick, in_flight);
            self.emit(GameEvent::TickSkipped { tick, in_flight });
            return None;
        }

        let target = self.target.as_ref()?;
        let context = CaptureContext {
            tick,
            round: target.round,
            target: target.symbol.clone(),
            target_set_at: target.set_at,
            captured_at: self.timer.now(),
        };

        self.in_flight = Some(tick);
        self.stats.started += 1;
        debug!("Tick {} captured for target {}", tick, context.target);
        Some(context)
    }

    /// Apply a tick's classification against the context it was captured with.
    pub fn resolve_tick(
        &mut self,
        context: CaptureContext,
        result: Result<ClassificationResult>,
    ) -> TickOutcome {
        if self.in_flight == Some(context.tick) {
            self.in_flight = None;
        }

        if self.status != SessionStatus::Active {
            debug!(
                "Discarding tick {} result, session is {}",
                context.tick, self.status
            );
            return TickOutcome::Discarded;
        }

        let guess = match result {
            Ok(guess) => guess,
            Err(e) => {
                self.stats.dropped += 1;
                warn!("Tick {} dropped: {}", context.tick, e);
                let reason = e.to_string();
                self.emit(GameEvent::TickDropped {
                    tick: context.tick,
                    reason: reason.clone(),
                });
                return TickOutcome::Dropped { reason };
            }
        };

        let current_round = self.target.as_ref().map(|t| t.round);
        if current_round != Some(context.round) {
            self.stats.stale += 1;
            debug!(
                "Tick {} resolved for round {}, current round is {:?}",
                context.tick, context.round, current_round
            );
            let stale_guess = guess.symbol().cloned();
            self.emit(GameEvent::Guess {
                guess,
                target: context.target,
                stale: true,
            });
            return TickOutcome::Stale { guess: stale_guess };
        }

        match guess {
            ClassificationResult::Symbol(symbol) if symbol.matches(&context.target) => {
                self.apply_match(&context, symbol)
            }
            ClassificationResult::Symbol(symbol) => {
                self.stats.missed += 1;
                debug!("Tick {}: saw {}, want {}", context.tick, symbol, context.target);
                self.emit(GameEvent::Guess {
                    guess: ClassificationResult::Symbol(symbol.clone()),
                    target: context.target.clone(),
                    stale: false,
                });
                TickOutcome::Missed {
                    guess: symbol,
                    target: context.target,
                }
            }
            ClassificationResult::Unclear => {
                self.stats.unclear += 1;
                debug!("Tick {}: classifier unsure", context.tick);
                self.emit(GameEvent::Guess {
                    guess: ClassificationResult::Unclear,
                    target: context.target,
                    stale: false,
                });
                TickOutcome::Unclear
            }
        }
    }

    fn apply_match(&mut self, context: &CaptureContext, symbol: Symbol) -> TickOutcome {
        let elapsed_secs = context.elapsed_seconds();
        let points = points_for(elapsed_secs);

        self.state.score = accumulate(self.state.score, points);
        self.state.found += 1;
        self.stats.matched += 1;

        let score = self.state.score;
        let found = self.state.found;
        info!(
            "Found {} in {:.1}s: +{} (score {}, {}/{})",
            context.target, elapsed_secs, points, score, found, self.required
        );
        self.emit(GameEvent::Matched {
            symbol: context.target.clone(),
            points,
            score,
            found,
            required: self.required,
            elapsed_secs,
        });

        let completed = found >= self.required;
        if completed {
            self.status = SessionStatus::Completed;
            self.target = None;
            if let Err(e) = self.finalize() {
                warn!("Failed to record leaderboard attempt: {}", e);
            }
        } else {
            self.advance_target(TargetChangeReason::Found);
        }

        TickOutcome::Matched {
            symbol,
            points,
            score,
            found,
            completed,
        }
    }

    /// Replace the current target without scoring.
    pub fn skip(&mut self) -> Result<Symbol> {
        if self.status != SessionStatus::Active {
            return Err(Error::InvalidState(format!(
                "cannot skip while session is {}",
                self.status
            )));
        }
        if let Some(target) = &self.target {
            debug!("Skipping target {}", target.symbol);
        }
        Ok(self.advance_target(TargetChangeReason::Skipped))
    }

    /// Record the final score and emit the terminal event.
    ///
    /// Runs once, on completion. If the store fails the session is still
    /// completed and the error is returned.
    pub fn finalize(&mut self) -> Result<SessionSummary> {
        if self.status != SessionStatus::Completed {
            return Err(Error::InvalidState(format!(
                "cannot finalize while session is {}",
                self.status
            )));
        }
        if self.summary.is_some() {
            return Err(Error::InvalidState(
                "session already finalized".to_string(),
            ));
        }

        let recorded = self
            .leaderboard
            .record_attempt(&self.state.player, self.state.score);
        let new_best = recorded.as_ref().copied().unwrap_or(false);

        let summary = SessionSummary {
            player: self.state.player.clone(),
            score: self.state.score,
            found: self.state.found,
            required: self.required,
            duration_secs: RoundTimer::seconds_between(self.state.started_at, self.timer.now()),
            started_at: self.state.started_wall,
            best: self.leaderboard.best(&self.state.player),
            rank: self.leaderboard.rank(&self.state.player),
            new_best,
            stats: self.stats,
        };
        self.summary = Some(summary.clone());

        info!(
            "Session complete for {}: {} points in {:.1}s",
            summary.player, summary.score, summary.duration_secs
        );
        self.emit(GameEvent::Completed(summary.clone()));

        recorded.map(|_| summary)
    }

    /// Stop the session; results still in flight will be discarded.
    pub fn teardown(&mut self) {
        self.in_flight = None;
        if matches!(
            self.status,
            SessionStatus::Active | SessionStatus::NotStarted
        ) {
            self.status = SessionStatus::Ended;
            self.target = None;
            info!(
                "Session ended for {} with {} points ({} found)",
                self.state.player, self.state.score, self.state.found
            );
            self.emit(GameEvent::SessionEnded {
                score: self.state.score,
                found: self.state.found,
            });
        }
    }

    fn advance_target(&mut self, reason: TargetChangeReason) -> Symbol {
        let symbol = self.selector.next();
        self.last_round += 1;
        self.target = Some(Target {
            symbol: symbol.clone(),
            set_at: self.timer.start(),
            round: self.last_round,
        });

        debug!("Round {}: target {} ({})", self.last_round, symbol, reason);
        self.emit(GameEvent::TargetChanged {
            target: symbol.clone(),
            reason,
            round: self.last_round,
        });
        symbol
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn required_finds(&self) -> u32 {
        self.required
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn pool(&self) -> &EmojiPool {
        self.selector.pool()
    }

    pub fn leaderboard(&self) -> &dyn LeaderboardStore {
        self.leaderboard.as_ref()
    }
}
