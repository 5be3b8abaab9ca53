//! Solver configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables (EXPRSOLVE_ROOT, EXPRSOLVE_UNKNOWN, EXPRSOLVE_LOG)
//! 3. User-level (~/.config/exprsolve/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use exprsolve::util::config::SolverConfig;
//!
//! let config = SolverConfig::default();
//! assert_eq!(config.root, "root");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_MAX_DEPTH;
use crate::util::logger::LogLevel;

/// Environment variable overriding the root name
pub const ENV_ROOT: &str = "EXPRSOLVE_ROOT";
/// Environment variable overriding the unknown name
pub const ENV_UNKNOWN: &str = "EXPRSOLVE_UNKNOWN";
/// Environment variable overriding the log level
pub const ENV_LOG: &str = "EXPRSOLVE_LOG";

/// Settings for building and solving a definition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Name of the root definition
    pub root: String,
    /// Name resolved to the unknown leaf when solving
    pub unknown: String,
    /// Reject Mul/FloorDiv inversions that do not divide evenly
    pub check_exactness: bool,
    /// Maximum resolution depth
    pub max_depth: usize,
    /// Log level used when no CLI flag overrides it
    pub log_level: LogLevel,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            root: "root".to_string(),
            unknown: "humn".to_string(),
            check_exactness: true,
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: LogLevel::Info,
        }
    }
}

impl SolverConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render as a TOML document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(root) = lookup(ENV_ROOT) {
            self.root = root;
        }
        if let Some(unknown) = lookup(ENV_UNKNOWN) {
            self.unknown = unknown;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level.parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_LOG,
                value: level,
            })?;
        }
        Ok(())
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("exprsolve"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("exprsolve"));
    }

    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("exprsolve"));
    }

    None
}

/// Get the user config file path (~/.config/exprsolve/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load a config file, or defaults if it does not exist
pub fn load_config_from(path: &Path) -> Result<SolverConfig, ConfigError> {
    if !path.exists() {
        return Ok(SolverConfig::default());
    }
    let content = fs::read_to_string(path)?;
    SolverConfig::from_toml_str(&content)
}

/// Load the user-level config file, or defaults if there is none
pub fn load_user_config() -> Result<SolverConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(SolverConfig::default()),
    }
}

/// User-level config with environment overrides applied
pub fn load() -> Result<SolverConfig, ConfigError> {
    let mut config = load_user_config()?;
    config.apply_env()?;
    Ok(config)
}

/// Write a config file, creating parent directories
pub fn save_config_to(
    path: &Path,
    config: &SolverConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

/// Write the user-level config file
pub fn save_user_config(config: &SolverConfig) -> Result<PathBuf, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(&path, config)?;
    Ok(path)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("Cannot determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.root, "root");
        assert_eq!(config.unknown, "humn");
        assert!(config.check_exactness);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SolverConfig::from_toml_str("unknown = \"me\"\ncheck_exactness = false\n").unwrap();
        assert_eq!(config.unknown, "me");
        assert!(!config.check_exactness);
        assert_eq!(config.root, "root");
    }

    #[test]
    fn test_log_level_in_toml() {
        let config = SolverConfig::from_toml_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(SolverConfig::from_toml_str("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_ROOT, "top"), (ENV_LOG, "warn")].into_iter().collect();
        let mut config = SolverConfig::default();
        config
            .apply_env_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.root, "top");
        assert_eq!(config.unknown, "humn");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_env_level() {
        let mut config = SolverConfig::default();
        let err = config
            .apply_env_from(|key| (key == ENV_LOG).then(|| "chatty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: ENV_LOG, .. }));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert_eq!(load_config_from(&path).unwrap(), SolverConfig::default());

        let config = SolverConfig {
            root: "eq".to_string(),
            max_depth: 64,
            ..SolverConfig::default()
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }
}
