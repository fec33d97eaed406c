use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

use game_core::{Config, Params};
use serde::Deserialize;

/// Host settings, loadable from a TOML file.
///
/// ```toml
/// tick_ms = 16
/// log_every = 60
///
/// [game]
/// opponent_speed = 50.0
/// win_score = 7
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Fixed tick period in milliseconds
    pub tick_ms: u64,
    /// Heartbeat log interval in ticks
    pub log_every: u32,
    /// Treat end of the control stream as a quit command
    pub quit_on_eof: bool,
    pub game: Config,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_ms: Params::TICK_MS,
            log_every: 60,
            quit_on_eof: true,
            game: Config::default(),
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("reading config '{}': {}", path.display(), e))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let config: HostConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.tick_ms) {
            return Err(format!("tick_ms must be in 1..=1000, got {}", self.tick_ms));
        }
        if self.log_every == 0 {
            return Err("log_every must be at least 1".into());
        }
        self.game.validate()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
