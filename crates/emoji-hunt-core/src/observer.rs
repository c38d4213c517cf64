//! Presentation-side listeners for session events.

use std::sync::{Arc, Mutex};

use owo_colors::OwoColorize;

use crate::classify::ClassificationResult;
use crate::session::{GameEvent, SessionSummary};

pub trait SessionObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

/// Collects events; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.events().iter().filter(|e| e.kind() == kind).count()
    }
}

impl SessionObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}

/// Prints session progress to stdout with colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(line) = format_event_console(event) {
            println!("{}", line);
        }
    }
}

/// One console line per event; `None` for events not worth showing.
pub fn format_event_console(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::SessionStarted { player, required } => format!(
            "{} {} - find {} emojis!",
            "▶".green(),
            player.bold(),
            required
        ),
        GameEvent::TargetChanged { target, reason, .. } => {
            format!("{} Find: {}  ({})", "🎯", target, reason.to_string().dimmed())
        }
        GameEvent::Guess { guess, target, stale } => {
            let seen = match guess {
                ClassificationResult::Symbol(symbol) => symbol.to_string(),
                ClassificationResult::Unclear => "?".to_string(),
            };
            let suffix = if *stale { " (previous target)" } else { "" };
            format!(
                "{} Seen {} - looking for {}{}",
                "·".dimmed(),
                seen,
                target,
                suffix.dimmed()
            )
        }
        GameEvent::Matched {
            symbol,
            points,
            score,
            found,
            required,
            elapsed_secs,
        } => format!(
            "{} {} found in {:.1}s  {}  score {} ({}/{})",
            "✔".green().bold(),
            symbol,
            elapsed_secs,
            format!("+{}", points).green(),
            score.bold(),
            found,
            required
        ),
        GameEvent::TickDropped { reason, .. } => {
            format!("{} {}", "!".yellow(), reason.dimmed())
        }
        GameEvent::Completed(summary) => format_summary_console(summary),
        GameEvent::SessionEnded { score, found } => format!(
            "{} Session ended early: {} points, {} found",
            "■".red(),
            score,
            found
        ),
        GameEvent::TickSkipped { .. } => return None,
    };
    Some(line)
}

fn format_summary_console(summary: &SessionSummary) -> String {
    let border = "━".repeat(40);
    let mut lines = vec![
        border.dimmed().to_string(),
        format!(
            "  {} {}",
            "Well done,".bold(),
            summary.player.bold()
        ),
        format!(
            "  Score {}  ({} found in {:.1}s)",
            summary.score.green().bold(),
            summary.found,
            summary.duration_secs
        ),
    ];
    if summary.new_best {
        lines.push(format!("  {}", "New personal best!".yellow().bold()));
    } else if let Some(best) = summary.best {
        lines.push(format!("  Personal best: {}", best));
    }
    if let Some(rank) = summary.rank {
        lines.push(format!("  Leaderboard rank: #{}", rank));
    }
    lines.push(border.dimmed().to_string());
    lines.join("\n")
}
