//! Runtime configuration from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (default: derived from the clock)
//! - `TUI_2048_UNDO`: set to "0" or "false" to disable undo
//! - `TUI_2048_LOG_PATH`: write logs to this file (logging is off otherwise,
//!   unless `RUST_LOG` is set)
//!
//! Grid size, the winning tile and spawn weights are fixed game constants
//! and are not configurable.

use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const UNDO_VAR: &str = "TUI_2048_UNDO";
pub const LOG_PATH_VAR: &str = "TUI_2048_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub undo: bool,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            undo: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let undo = lookup(UNDO_VAR)
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(true);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            undo,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
