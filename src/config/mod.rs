//! Service configuration
//!
//! Loaded from an optional JSON file; every field has a default. The salt
//! and the signal source URLs can be overridden from the environment:
//!
//! | Variable                | Field                  |
//! |-------------------------|------------------------|
//! | `MYSTIC_SALT`           | `salt`                 |
//! | `HOROSCOPE_API_URL`     | `signals.horoscope_url`|
//! | `DREAM_API_URL`         | `signals.dream_url`    |
//! | `GOOGLE_SEARCH_API_URL` | `signals.search_url`   |
//! | `TIKTOK_API_URL`        | `signals.video_url`    |
//!
//! The engine never sees this module; the salt is handed to it explicitly.

mod errors;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_UTC_OFFSET_HOURS;
use crate::engine::DerivationMode;
use crate::facts::Shio;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;
use crate::signals::excerpt::DEFAULT_EXCERPT_CHARS;
use crate::signals::SignalKind;

pub use errors::{ConfigError, ConfigResult};

/// Environment variable holding the salt
pub const SALT_ENV: &str = "MYSTIC_SALT";

/// Default pinned year
pub const DEFAULT_PINNED_YEAR: i32 = 2025;

/// Signal source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalsConfig {
    #[serde(default)]
    pub horoscope_url: Option<String>,

    #[serde(default)]
    pub dream_url: Option<String>,

    #[serde(default)]
    pub search_url: Option<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    /// Per-source timeout in milliseconds (default: 3000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum excerpt length in characters (default: 160)
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_excerpt_chars() -> usize {
    DEFAULT_EXCERPT_CHARS
}

impl Default for SignalsConfig {
    fn default() -> Self {
        Self {
            horoscope_url: None,
            dream_url: None,
            search_url: None,
            video_url: None,
            timeout_ms: default_timeout_ms(),
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

impl SignalsConfig {
    /// Configured URL for a kind, ignoring blank values
    pub fn url_for(&self, kind: SignalKind) -> Option<&str> {
        let url = match kind {
            SignalKind::Horoscope => &self.horoscope_url,
            SignalKind::Dream => &self.dream_url,
            SignalKind::Search => &self.search_url,
            SignalKind::Video => &self.video_url,
        };
        url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn env_var(kind: SignalKind) -> &'static str {
        match kind {
            SignalKind::Horoscope => "HOROSCOPE_API_URL",
            SignalKind::Dream => "DREAM_API_URL",
            SignalKind::Search => "GOOGLE_SEARCH_API_URL",
            SignalKind::Video => "TIKTOK_API_URL",
        }
    }

    fn set_url(&mut self, kind: SignalKind, url: String) {
        let slot = match kind {
            SignalKind::Horoscope => &mut self.horoscope_url,
            SignalKind::Dream => &mut self.dream_url,
            SignalKind::Search => &mut self.search_url,
            SignalKind::Video => &mut self.video_url,
        };
        *slot = Some(url);
    }
}

/// History settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// History file (default: "./mystic_history.json")
    #[serde(default = "default_history_path")]
    pub path: PathBuf,

    /// Retained entries (default: 100)
    #[serde(default = "default_history_limit")]
    pub limit: usize,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./mystic_history.json")
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            limit: default_history_limit(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Salt appended to every canonical form (default: empty)
    #[serde(default)]
    pub salt: String,

    /// Civil offset of the clock in hours east of UTC (default: 7)
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,

    /// Year written into every record (default: 2025)
    #[serde(default = "default_pinned_year")]
    pub pinned_year: i32,

    /// Cyclical-year label written into every record (default: Ular)
    #[serde(default = "default_shio")]
    pub shio: Shio,

    /// Derivation mode (default: weighted)
    #[serde(default)]
    pub mode: DerivationMode,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub signals: SignalsConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

fn default_pinned_year() -> i32 {
    DEFAULT_PINNED_YEAR
}

fn default_shio() -> Shio {
    Shio::Ular
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            salt: String::new(),
            utc_offset_hours: default_utc_offset_hours(),
            pinned_year: default_pinned_year(),
            shio: default_shio(),
            mode: DerivationMode::default(),
            log_level: default_log_level(),
            signals: SignalsConfig::default(),
            history: HistoryConfig::default(),
            http: HttpServerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from a JSON file, apply environment overrides and validate
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let mut config = Self::from_json(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise defaults; then environment
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let mut config = Self::default();
                config.apply_overrides(|key| std::env::var(key).ok());
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Parse without touching the environment
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(salt) = lookup(SALT_ENV) {
            self.salt = salt;
        }
        for kind in SignalKind::ALL {
            if let Some(url) = lookup(SignalsConfig::env_var(kind)) {
                self.signals.set_url(kind, url);
            }
        }
    }

    /// Validate field ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::invalid(
                "utc_offset_hours",
                format!("{} is outside -12..=14", self.utc_offset_hours),
            ));
        }

        if !(1..=9999).contains(&self.pinned_year) {
            return Err(ConfigError::invalid(
                "pinned_year",
                format!("{} is outside 1..=9999", self.pinned_year),
            ));
        }

        if self.signals.timeout_ms == 0 {
            return Err(ConfigError::invalid("signals.timeout_ms", "must be > 0"));
        }

        if self.signals.excerpt_chars == 0 {
            return Err(ConfigError::invalid("signals.excerpt_chars", "must be > 0"));
        }

        if self.history.limit == 0 {
            return Err(ConfigError::invalid("history.limit", "must be > 0"));
        }

        self.severity()?;
        self.http.validate()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| ConfigError::invalid("log_level", e))
    }
}
