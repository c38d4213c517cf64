mod cli;
mod commands;
mod input;
mod settings;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("emoji_hunt=info,emoji_hunt_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = settings::load(&args.config)?;

    match args.command {
        Command::Play {
            player,
            frames,
            endpoint,
            leaderboard,
            seed,
        } => {
            let options = commands::play::PlayOptions {
                player,
                frames,
                endpoint,
                leaderboard,
                seed,
            };
            commands::play::run(settings, options).await
        }
        Command::Leaderboard { leaderboard, json } => {
            commands::leaderboard::run(&settings, leaderboard.as_deref(), json)
        }
        Command::Classify { image, endpoint } => {
            commands::classify::run(settings, &image, endpoint).await
        }
        Command::Pool => commands::pool::run(&settings),
    }
}
