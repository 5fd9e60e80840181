//! Configuration management for framescout
//!
//! Settings are read from environment variables with defaults, then
//! optionally overridden by command-line flags.
//!
//! # Environment Variables
//!
//! - `FRAMESCOUT_MAX_DEPTH`: Deepest directory level scanned for nested projects - default: 10
//! - `FRAMESCOUT_EXCLUDE_DIRS`: Comma-separated directory names to skip in addition
//!   to the built-in deny-list - default: empty
//! - `FRAMESCOUT_MIN_CERTAINTY`: Hide detections below this certainty - default: 0
//! - `FRAMESCOUT_LOG_LEVEL`: Logging level - default: "info"
//! - `FRAMESCOUT_LOG_JSON`: Emit JSON logs (true|false) - default: false
//!
//! # Example
//!
//! ```no_run
//! use framescout::ScoutConfig;
//!
//! let config = ScoutConfig::default();
//! config.validate().expect("Invalid configuration");
//! let scan_config = config.to_scan_config();
//! assert!(scan_config.is_excluded("node_modules"));
//! ```

use crate::detection::scanner::{ScanConfig, MAX_SCAN_DEPTH};
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MIN_CERTAINTY: f64 = 0.0;
const MAX_DEPTH_LIMIT: usize = 64;

pub const ENV_MAX_DEPTH: &str = "FRAMESCOUT_MAX_DEPTH";
pub const ENV_EXCLUDE_DIRS: &str = "FRAMESCOUT_EXCLUDE_DIRS";
pub const ENV_MIN_CERTAINTY: &str = "FRAMESCOUT_MIN_CERTAINTY";
pub const ENV_LOG_LEVEL: &str = "FRAMESCOUT_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "FRAMESCOUT_LOG_JSON";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Runtime configuration for scans and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    /// Deepest directory level visited by the deep pass (root children are 1)
    pub max_depth: usize,

    /// Directory names skipped in addition to the built-in deny-list
    pub extra_excluded_dirs: Vec<String>,

    /// Detections below this certainty are not displayed
    pub min_certainty: f64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON-formatted logs
    pub log_json: bool,
}

impl Default for ScoutConfig {
    /// Loads the configuration from `FRAMESCOUT_*` variables.
    ///
    /// Unparsable values fall back to their defaults; use
    /// [`ScoutConfig::from_env`] to surface them as errors instead.
    fn default() -> Self {
        let max_depth = env::var(ENV_MAX_DEPTH)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(MAX_SCAN_DEPTH);

        let extra_excluded_dirs = env::var(ENV_EXCLUDE_DIRS)
            .map(|v| split_list(&v))
            .unwrap_or_default();

        let min_certainty = env::var(ENV_MIN_CERTAINTY)
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_MIN_CERTAINTY);

        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var(ENV_LOG_JSON)
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            max_depth,
            extra_excluded_dirs,
            min_certainty,
            log_level,
            log_json,
        }
    }
}

impl ScoutConfig {
    /// Loads from the environment, rejecting values that do not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ENV_MAX_DEPTH) {
            config.max_depth = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::ParseError {
                    field: ENV_MAX_DEPTH.to_string(),
                    error: e.to_string(),
                }
            })?;
        }

        if let Ok(raw) = env::var(ENV_MIN_CERTAINTY) {
            config.min_certainty =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseFloatError| ConfigError::ParseError {
                        field: ENV_MIN_CERTAINTY.to_string(),
                        error: e.to_string(),
                    })?;
        }

        if let Ok(raw) = env::var(ENV_LOG_JSON) {
            config.log_json = raw.trim().parse().map_err(|e: std::str::ParseBoolError| {
                ConfigError::ParseError {
                    field: ENV_LOG_JSON.to_string(),
                    error: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// Checks that the depth bound and certainty threshold are in range and
    /// that the log level is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max depth must be at least 1".to_string(),
            ));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::ValidationFailed(format!(
                "Max depth cannot exceed {}",
                MAX_DEPTH_LIMIT
            )));
        }

        if !(0.0..=100.0).contains(&self.min_certainty) {
            return Err(ConfigError::ValidationFailed(format!(
                "Min certainty must be between 0 and 100, got {}",
                self.min_certainty
            )));
        }

        if let Some(bad) = self
            .extra_excluded_dirs
            .iter()
            .find(|d| d.contains('/') || d.contains('\\'))
        {
            return Err(ConfigError::ValidationFailed(format!(
                "Excluded directory '{}' must be a single name, not a path",
                bad
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Scanner settings derived from this configuration
    pub fn to_scan_config(&self) -> ScanConfig {
        let mut scan_config = ScanConfig::default().exclude(self.extra_excluded_dirs.iter().cloned());
        scan_config.max_depth = self.max_depth;
        scan_config
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("max_depth".to_string(), self.max_depth.to_string());
        map.insert(
            "extra_excluded_dirs".to_string(),
            self.extra_excluded_dirs.join(","),
        );
        map.insert("min_certainty".to_string(), self.min_certainty.to_string());
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());

        map
    }
}

impl fmt::Display for ScoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Framescout Configuration:")?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        if self.extra_excluded_dirs.is_empty() {
            writeln!(f, "  Extra Excluded Dirs: (none)")?;
        } else {
            writeln!(f, "  Extra Excluded Dirs: {}", self.extra_excluded_dirs.join(", "))?;
        }
        writeln!(f, "  Min Certainty: {}", self.min_certainty)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        Ok(())
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
