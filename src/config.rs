use crate::chat::DEFAULT_REPLY_DELAY;
use crate::store::default_store_dir;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Bundled config for mobile and web builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DATA_DIR_VAR: &str = "STUHEALTH_DATA_DIR";
pub const CHAT_DELAY_VAR: &str = "STUHEALTH_CHAT_DELAY_MS";
pub const LOG_LEVEL_VAR: &str = "STUHEALTH_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub chat_reply_delay: Duration,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_store_dir(),
            chat_reply_delay: DEFAULT_REPLY_DELAY,
            log_level: Level::INFO,
        }
    }
}

/// An env value that failed to parse and was replaced by its default.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedVar {
    pub name: &'static str,
    pub value: String,
}

impl RejectedVar {
    pub fn log(&self) {
        tracing::warn!(value = %self.value, "ignoring invalid {}", self.name);
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; bad values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, rejected) = Self::parse_lookup(lookup);
        for var in &rejected {
            var.log();
        }
        config
    }

    /// Like `from_env`, but hands the rejected values back instead of
    /// logging them, for callers that install the subscriber afterwards.
    pub fn parse_env() -> (Self, Vec<RejectedVar>) {
        Self::parse_lookup(|key| env::var(key).ok())
    }

    pub fn parse_lookup<F>(lookup: F) -> (Self, Vec<RejectedVar>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }

        if let Some(raw) = lookup(CHAT_DELAY_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.chat_reply_delay = Duration::from_millis(ms),
                Err(_) => rejected.push(RejectedVar {
                    name: CHAT_DELAY_VAR,
                    value: raw,
                }),
            }
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            match parse_level(&raw) {
                Some(level) => config.log_level = level,
                None => rejected.push(RejectedVar {
                    name: LOG_LEVEL_VAR,
                    value: raw,
                }),
            }
        }

        (config, rejected)
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if env::var(key).is_err() {
            // SAFETY: called at startup before any threads are spawned
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}
