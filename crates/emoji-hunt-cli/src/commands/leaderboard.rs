//! Leaderboard display.

use std::path::Path;

use anyhow::Result;
use emoji_hunt_core::{GameSettings, JsonLeaderboard, LeaderboardEntry, LeaderboardStore};

pub fn run(settings: &GameSettings, path: Option<&Path>, json: bool) -> Result<()> {
    let path = path.unwrap_or(settings.leaderboard_path.as_path());
    let board = JsonLeaderboard::open(path)?;
    let entries = board.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No scores recorded yet.");
    } else {
        print_standings(&entries, entries.len());
    }
    Ok(())
}

pub fn print_standings(entries: &[LeaderboardEntry], limit: usize) {
    println!("{:>4}  {:<20} {:>6}", "Rank", "Player", "Score");
    for (i, entry) in entries.iter().take(limit).enumerate() {
        println!("{:>4}  {:<20} {:>6}", i + 1, entry.name, entry.score);
    }
}
