use anyhow::Result;
use emoji_hunt_core::{EmojiPool, GameSettings};

pub fn run(settings: &GameSettings) -> Result<()> {
    let pool = EmojiPool::new(settings.pool.iter().map(String::as_str))?;
    println!("{} targets:", pool.len());
    for symbol in pool.symbols() {
        print!("{} ", symbol);
    }
    println!();
    Ok(())
}
