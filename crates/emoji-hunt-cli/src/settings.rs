use std::path::Path;

use emoji_hunt_core::GameSettings;
use tracing::{info, warn};

/// Load settings, falling back to defaults when the file is absent.
///
/// A file that exists but does not parse is an error.
pub fn load(path: &Path) -> anyhow::Result<GameSettings> {
    if !path.exists() {
        warn!("Settings file {:?} not found, using defaults", path);
        return Ok(GameSettings::default());
    }

    let settings = GameSettings::load(path)?;
    info!("Loaded settings from {:?}", path);
    Ok(settings)
}
