//! CLI argument definitions for emoji-hunt.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emoji-hunt")]
#[command(about = "Find household objects matching emoji targets", version)]
pub struct Args {
    /// Path to settings file (TOML)
    #[arg(long, global = true, value_name = "FILE", default_value = "emoji-hunt.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play one session against a directory of frames
    Play {
        /// Player name (empty plays as Anonymous)
        #[arg(short, long)]
        player: String,
        /// Directory of image files to capture from
        #[arg(short, long, value_name = "DIR")]
        frames: PathBuf,
        /// Classification endpoint URL
        #[arg(long, env = "EMOJI_HUNT_ENDPOINT")]
        endpoint: Option<String>,
        /// Leaderboard file path
        #[arg(long, value_name = "FILE")]
        leaderboard: Option<PathBuf>,
        /// Seed for target selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the leaderboard
    Leaderboard {
        /// Leaderboard file path
        #[arg(long, value_name = "FILE")]
        leaderboard: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a single image
    Classify {
        /// Image file
        image: PathBuf,
        /// Classification endpoint URL
        #[arg(long, env = "EMOJI_HUNT_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// Print the active target pool
    Pool,
}
