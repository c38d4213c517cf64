//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without actually executing the commands (which would need a camera feed
//! and the classification service).

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported.
// Keep in sync with src/cli.rs.
#[derive(Parser)]
#[command(name = "emoji-hunt")]
#[command(about = "Find household objects matching emoji targets", version)]
struct Args {
    /// Path to settings file (TOML)
    #[arg(long, global = true, value_name = "FILE", default_value = "emoji-hunt.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
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

#[test]
fn test_parse_play_minimal() {
    let args =
        Args::try_parse_from(["emoji-hunt", "play", "--player", "Bob", "--frames", "shots"]).unwrap();
    assert_eq!(args.config, PathBuf::from("emoji-hunt.toml"));
    match args.command {
        Command::Play {
            player,
            frames,
            endpoint,
            leaderboard,
            seed,
        } => {
            assert_eq!(player, "Bob");
            assert_eq!(frames, PathBuf::from("shots"));
            assert_eq!(endpoint, std::env::var("EMOJI_HUNT_ENDPOINT").ok());
            assert!(leaderboard.is_none());
            assert!(seed.is_none());
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_with_overrides() {
    let args = Args::try_parse_from([
        "emoji-hunt",
        "play",
        "-p",
        "Alice",
        "-f",
        "shots",
        "--endpoint",
        "http://10.0.0.2:3000/api/mistral",
        "--leaderboard",
        "scores.json",
        "--seed",
        "42",
    ])
    .unwrap();
    match args.command {
        Command::Play {
            endpoint,
            leaderboard,
            seed,
            ..
        } => {
            assert_eq!(endpoint.as_deref(), Some("http://10.0.0.2:3000/api/mistral"));
            assert_eq!(leaderboard, Some(PathBuf::from("scores.json")));
            assert_eq!(seed, Some(42));
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_empty_player() {
    let args =
        Args::try_parse_from(["emoji-hunt", "play", "--player", "", "--frames", "shots"]).unwrap();
    match args.command {
        Command::Play { player, .. } => assert!(player.is_empty()),
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_requires_frames() {
    let result = Args::try_parse_from(["emoji-hunt", "play", "--player", "Bob"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_leaderboard_with_json() {
    let args = Args::try_parse_from(["emoji-hunt", "leaderboard", "--json"]).unwrap();
    match args.command {
        Command::Leaderboard { json, leaderboard } => {
            assert!(json);
            assert!(leaderboard.is_none());
        }
        _ => panic!("Expected Leaderboard command"),
    }
}

#[test]
fn test_parse_classify_image() {
    let args = Args::try_parse_from(["emoji-hunt", "classify", "apple.jpg"]).unwrap();
    match args.command {
        Command::Classify { image, endpoint } => {
            assert_eq!(image, PathBuf::from("apple.jpg"));
            assert_eq!(endpoint, std::env::var("EMOJI_HUNT_ENDPOINT").ok());
        }
        _ => panic!("Expected Classify command"),
    }
}

#[test]
fn test_parse_global_config_after_subcommand() {
    let args = Args::try_parse_from(["emoji-hunt", "pool", "--config", "custom.toml"]).unwrap();
    assert_eq!(args.config, PathBuf::from("custom.toml"));
    assert!(matches!(args.command, Command::Pool));
}

#[test]
fn test_missing_subcommand_fails() {
    let result = Args::try_parse_from(["emoji-hunt"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["emoji-hunt", "invalid-command"]);
    assert!(result.is_err());
}

#[test]
fn test_args_definition_is_valid() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}

#[test]
fn test_endpoint_reads_environment() {
    use clap::CommandFactory;
    use std::ffi::OsStr;

    let command = Args::command();
    for name in ["play", "classify"] {
        let sub = command.find_subcommand(name).unwrap();
        let endpoint = sub
            .get_arguments()
            .find(|arg| arg.get_id() == "endpoint")
            .unwrap();
        assert_eq!(endpoint.get_env(), Some(OsStr::new("EMOJI_HUNT_ENDPOINT")));
    }
}
