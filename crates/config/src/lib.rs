//! Configuration types for volmode: which tool to drive, how big a volume step is, and
//! the keymap installed while an interactive session is active.

use std::{
    env,
    path::{Path, PathBuf},
};

mod defaults;
mod error;
mod keys;
mod loader;

#[cfg(test)]
mod test_parse;

pub use defaults::{DEFAULT_NATIVE_MAX, DEFAULT_PROGRAM, DEFAULT_STEP};
pub use error::{Error, excerpt_at};
pub use keys::{Action, Binding, Keys, Toggle};
pub use loader::{load_from_path, load_from_str};
use serde::{Deserialize, Serialize};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Audio-control program to run (looked up on `PATH`).
    #[serde(default = "defaults::default_program")]
    pub program: String,

    /// The tool's native volume value for 100%.
    #[serde(default = "defaults::default_native_max")]
    pub native_max: u32,

    /// Percent added or removed by one volume-up/volume-down.
    #[serde(default = "defaults::default_step")]
    pub step: u8,

    /// Keymap installed while an interactive session is active.
    #[serde(default = "defaults::default_keys")]
    pub keys: Keys,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: defaults::default_program(),
            native_max: defaults::default_native_max(),
            step: defaults::default_step(),
            keys: defaults::default_keys(),
        }
    }
}

impl Config {
    /// Look up the action bound to `key` in the interactive keymap.
    pub fn action(&self, key: &str) -> Option<Action> {
        self.keys.get(key).map(|b| b.action)
    }

    /// Check value ranges and keymap consistency.
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("program must not be empty".to_string());
        }
        if self.native_max == 0 {
            return Err("native_max must be greater than zero".to_string());
        }
        if !(1..=100).contains(&self.step) {
            return Err(format!("step must be within 1..=100, got {}", self.step));
        }
        self.keys.validate()
    }
}

/// Determine the preferred user config path (`~/.volmode/config.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".volmode");
    p.push("config.ron");
    p
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.volmode/config.ron` when it exists.
/// 3) Else `None`: the caller runs with [`Config::default`].
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}

/// Load the configuration selected by [`resolve_config_path`], falling back to defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
    match resolve_config_path(explicit) {
        Some(path) => load_from_path(&path),
        None => {
            tracing::debug!("no config file found; using built-in defaults");
            Ok(Config::default())
        }
    }
}
