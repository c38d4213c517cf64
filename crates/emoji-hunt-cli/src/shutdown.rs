use anyhow::Result;
use tokio::sync::watch;

/// Install the Ctrl+C handler; the receiver flips to `true` on interrupt.
pub fn install() -> Result<watch::Receiver<bool>> {
    let (tx, rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        println!("\nShutting down...");
        let _ = tx.send(true);
    })?;
    Ok(rx)
}
