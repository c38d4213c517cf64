use std::io::{self, BufRead};
use std::thread;

use emoji_hunt_core::RunnerCommand;
use tokio::sync::mpsc;
use tracing::debug;

/// Read player commands from stdin on a dedicated thread.
///
/// An empty line or `s` skips the current target.
pub fn spawn_command_reader() -> mpsc::Receiver<RunnerCommand> {
    let (tx, rx) = mpsc::channel(8);

    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(command) => {
                    if tx.blocking_send(command).is_err() {
                        break;
                    }
                }
                None => debug!("Ignoring input {:?}", line.trim()),
            }
        }
    });

    rx
}

fn parse_command(line: &str) -> Option<RunnerCommand> {
    match line.trim() {
        "" | "s" | "S" | "skip" => Some(RunnerCommand::Skip),
        _ => None,
    }
}
