//! Config — nested sections, each field with its own default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::language::Language;
use crate::model::translation::MatchMode;

const CONFIG_ENV: &str = "SIGNVOICE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Extra phrases merged over the builtin tables.
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_history_path(),
            max_entries: default_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tts: TtsConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_max_retries() -> usize {
    3
}
fn default_true() -> bool {
    true
}
fn default_history_path() -> PathBuf {
    PathBuf::from("history.json")
}
fn default_max_entries() -> usize {
    200
}

fn config_path() -> PathBuf {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(p);
    }
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.join("config.json")))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Load config from `$SIGNVOICE_CONFIG` or config.json next to the binary.
pub fn load_config() -> Config {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Config {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => {
            log::info!("No config at {:?}, using defaults", path);
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&contents) {
        Ok(cfg) => {
            log::info!("Loaded config from {:?}", path);
            cfg
        }
        Err(e) => {
            log::warn!("Invalid config at {:?}: {e}; using defaults", path);
            Config::default()
        }
    }
}
