//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the active panel again after a tab switch or a successful submit
    #[serde(default = "default_render_after_change")]
    pub render_after_change: bool,
}

fn default_prompt() -> String {
    "planner> ".to_string()
}

fn default_render_after_change() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            render_after_change: default_render_after_change(),
        }
    }
}

/// Log output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so failures are returned as warnings
    /// for the caller to report.
    pub fn load_default() -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        for path in default_config_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => return (config, warnings),
                    Err(e) => warnings.push(e.to_string()),
                }
            }
        }

        // Fall back to environment-only config
        (Self::from_env(), warnings)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Shell overrides
        if let Some(prompt) = lookup("NUTRITION_PLANNER_PROMPT") {
            self.shell.prompt = prompt;
        }

        // Logging overrides
        if let Some(level) = lookup("NUTRITION_PLANNER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NUTRITION_PLANNER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        if let Some(file) = lookup("NUTRITION_PLANNER_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
    }
}

/// Config files tried by `Config::load_default`, in order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("nutrition-planner").join("config.toml")),
        Some(PathBuf::from("./nutrition-planner.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nutrition Planner Configuration
#
# Environment variables override these settings:
# - NUTRITION_PLANNER_PROMPT
# - NUTRITION_PLANNER_LOG_LEVEL
# - NUTRITION_PLANNER_LOG_FORMAT
# - NUTRITION_PLANNER_LOG_FILE

[shell]
# Prompt shown before each command
prompt = "planner> "

# Print the active panel again after switching tabs or adding an entry
render_after_change = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json
format = "pretty"

# Optional log file path (logs go to stderr otherwise)
# file = "/tmp/nutrition-planner.log"
"#
    .to_string()
}
