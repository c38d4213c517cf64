//! Play one session.

use std::path::PathBuf;

use anyhow::Result;
use emoji_hunt_core::{
    ConsoleObserver, DirectoryFrames, GameSession, GameSettings, HttpClassifier, JsonLeaderboard,
    LeaderboardStore, SessionRunner, SessionStatus,
};
use tracing::info;

use crate::commands::leaderboard::print_standings;
use crate::{input, shutdown};

const STANDINGS_SHOWN: usize = 10;

pub struct PlayOptions {
    pub player: String,
    pub frames: PathBuf,
    pub endpoint: Option<String>,
    pub leaderboard: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub async fn run(mut settings: GameSettings, options: PlayOptions) -> Result<()> {
    if let Some(endpoint) = options.endpoint {
        settings.classifier.endpoint = endpoint;
    }
    if let Some(path) = options.leaderboard {
        settings.leaderboard_path = path;
    }

    let shutdown = shutdown::install()?;

    let board = JsonLeaderboard::open(&settings.leaderboard_path)?;
    info!(
        "Leaderboard {:?}: {} player(s)",
        board.path(),
        board.list().len()
    );

    let session = GameSession::from_settings(&settings, Box::new(board), options.seed)?
        .with_observer(Box::new(ConsoleObserver));
    let frames = DirectoryFrames::open(&options.frames)?;
    let classifier = HttpClassifier::new(&settings.classifier)?;

    let mut runner = SessionRunner::new(session, frames, classifier)
        .with_tick_interval(settings.tick_interval())
        .with_commands(input::spawn_command_reader());

    println!("Emoji Hunt v{}", env!("CARGO_PKG_VERSION"));
    println!("Press Enter to skip a target, Ctrl+C to quit.");
    let status = runner.run(&options.player, shutdown).await?;

    if status == SessionStatus::Completed {
        println!();
        print_standings(&runner.session().leaderboard().list(), STANDINGS_SHOWN);
    }
    Ok(())
}
