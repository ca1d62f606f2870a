use crate::{
    error::{Error, Result},
    validate::DEFAULT_MAX_LENGTH,
};
use std::{env, path::PathBuf, sync::OnceLock};
use tracing::warn;

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Config {
    /// Plaintext rule table, used as the external rule source when present.
    pub rules_path: Option<PathBuf>,
    pub max_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            rules_path: get_path_from_env("OEMBED_RULES_PATH"),
            max_length: get_usize_from_env("OEMBED_MAX_LENGTH").unwrap_or(DEFAULT_MAX_LENGTH),
        }
    }

    /// Initialize the global config (call once at startup).
    ///
    /// # Errors
    ///
    /// Returns error if config is already initialized.
    pub fn init(self) -> Result<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| Error::other("config already initialized"))
    }
}

/// Get global config (initialized by `Config::init(self)`).
#[must_use]
pub fn global_config() -> Config {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_path: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

fn get_path_from_env(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_file())
}

fn get_usize_from_env(key: &str) -> Option<usize> {
    let raw = env::var(key).ok()?;
    raw.trim()
        .parse()
        .map_err(|_| warn!(key, value = %raw, "ignoring non-numeric setting"))
        .ok()
}
