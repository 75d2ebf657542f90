use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::prompt::PromptOptions;

/// Log verbosity written to the log file
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Inventory used when a command is given no id
    pub default_inventory: String,
    pub paths: PathsConfig,
    pub prompt: PromptConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for custom inventory YAML files
    pub inventories: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Mention the fictional counterpart of each narrative
    pub include_characters: bool,
    /// Replaces the inventory's closing sentence
    pub closing_instruction: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Fixed width of score bars; sized to the terminal when unset
    pub bar_width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_inventory: "tipi".to_string(),
            paths: PathsConfig::default(),
            prompt: PromptConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            inventories: Config::bfi_dir().join("inventories"),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            include_characters: true,
            closing_instruction: None,
        }
    }
}

impl PromptConfig {
    pub fn options(&self) -> PromptOptions {
        PromptOptions {
            include_characters: self.include_characters,
            closing_instruction: self.closing_instruction.clone(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Check BFI_CONFIG env var
        if let Ok(env_path) = std::env::var("BFI_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from BFI_CONFIG: {}", e);
                    }
                }
            }
        }

        // Try BFI_DIR/bfi.yaml
        if let Ok(bfi_dir) = std::env::var("BFI_DIR") {
            let path = PathBuf::from(bfi_dir).join("bfi.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from BFI_DIR: {}", e);
                    }
                }
            }
        }

        // Try ~/.config/bfi/bfi.yaml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("bfi").join("bfi.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./bfi.yaml (for development)
        let local_config = PathBuf::from("bfi.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Directory holding bfi.yaml and the inventories directory
    pub fn bfi_dir() -> PathBuf {
        std::env::var("BFI_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("bfi"))
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }

    pub fn inventories_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.inventories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_inventory, "tipi");
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.prompt.include_characters);
        assert!(config.prompt.closing_instruction.is_none());
        assert!(config.output.bar_width.is_none());
        assert!(config.paths.inventories.ends_with("inventories"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "default_inventory: bfi-44\nprompt:\n  include_characters: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_inventory, "bfi-44");
        assert!(!config.prompt.include_characters);
        assert_eq!(config.log_level, LogLevel::Info);

        let options = config.prompt.options();
        assert!(!options.include_characters);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
    }

    #[test]
    fn test_expand_path_no_expansion() {
        let path = PathBuf::from("/usr/local/share");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, PathBuf::from("/usr/local/share"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/inventories");
        let expanded = Config::expand_path(&path);
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.to_string_lossy().contains("inventories"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        // SAFETY: Test runs single-threaded, env var is test-specific
        unsafe {
            std::env::set_var("BFI_TEST_VAR", "/custom/path");
        }
        let path = PathBuf::from("$BFI_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);
        assert_eq!(expanded, PathBuf::from("/custom/path/subdir"));
        unsafe {
            std::env::remove_var("BFI_TEST_VAR");
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.prompt.closing_instruction = Some("Be brief.".to_string());
        let yaml_str = serde_yaml::to_string(&config).expect("Failed to serialize");
        let parsed: Config = serde_yaml::from_str(&yaml_str).expect("Failed to deserialize");
        assert_eq!(parsed.default_inventory, config.default_inventory);
        assert_eq!(parsed.prompt.closing_instruction.as_deref(), Some("Be brief."));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bfi.yaml");
        fs::write(&path, "log_level: debug\noutput:\n  bar_width: 20\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output.bar_width, Some(20));

        assert!(Config::load(Some(&temp.path().join("missing.yaml"))).is_err());
    }
}
