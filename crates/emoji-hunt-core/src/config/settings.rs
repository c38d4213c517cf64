use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{session, timing};
use crate::error::{Error, Result};
use crate::pool::DEFAULT_POOL;

/// Classification endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// URL receiving the raw base64 image body
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/api/mistral".to_string(),
            timeout_secs: timing::CLASSIFY_TIMEOUT_SECS,
        }
    }
}

impl ClassifierSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Runtime settings loaded from a TOML file.
///
/// Every field is optional in the file; missing fields take the
/// reference game's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub tick_interval_ms: u64,
    pub required_finds: u32,
    /// Target emojis, in display order
    pub pool: Vec<String>,
    pub leaderboard_path: PathBuf,
    pub classifier: ClassifierSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: timing::TICK_INTERVAL_MS,
            required_finds: session::REQUIRED_FINDS,
            pool: DEFAULT_POOL.iter().map(|s| s.to_string()).collect(),
            leaderboard_path: PathBuf::from("leaderboard.json"),
            classifier: ClassifierSettings::default(),
        }
    }
}

impl GameSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::ConfigParseError(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.required_finds == 0 {
            return Err(Error::ConfigParseError(
                "required_finds must be at least 1".to_string(),
            ));
        }
        if self.pool.is_empty() {
            return Err(Error::ConfigParseError("pool must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_reference_game() {
        let settings = GameSettings::default();
        assert_eq!(settings.tick_interval(), Duration::from_millis(4000));
        assert_eq!(settings.required_finds, 5);
        assert_eq!(settings.pool.len(), DEFAULT_POOL.len());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = GameSettings::parse(
            r#"
            required_finds = 3
            pool = ["🍎", "🍌"]

            [classifier]
            endpoint = "http://example.test/classify"
            "#,
        )
        .unwrap();

        assert_eq!(settings.required_finds, 3);
        assert_eq!(settings.pool, vec!["🍎", "🍌"]);
        assert_eq!(settings.classifier.endpoint, "http://example.test/classify");
        // Unset fields keep defaults
        assert_eq!(settings.tick_interval_ms, 4000);
        assert_eq!(settings.classifier.timeout_secs, 30);
    }

    #[test]
    fn test_parse_rejects_zero_finds() {
        let err = GameSettings::parse("required_finds = 0").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let err = GameSettings::parse("tick_interval_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("emoji-hunt.toml");
        fs::write(&path, "tick_interval_ms = 1500\n").unwrap();

        let settings = GameSettings::load(&path).unwrap();
        assert_eq!(settings.tick_interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = GameSettings::load(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
