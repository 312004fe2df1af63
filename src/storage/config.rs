//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory. Every section is
//! optional; a missing file or section yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::{self, Language};
use crate::ui::screens::pseudonym::DEFAULT_MIN_LENGTH;
use crate::ui::screens::NavigationMode;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// UI language id (`en-US`, `fr`); system locale when unset
    pub language: Option<String>,
    /// Directory of `.ftl` files overriding the built-in strings
    pub translations_dir: Option<PathBuf>,
    /// Accessibility settings
    pub accessibility: AccessibilitySettings,
    /// Pseudonym form settings
    pub pseudonym: PseudonymSettings,
    /// Recipe card content
    pub recipe: RecipeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            language: None,
            translations_dir: None,
            accessibility: AccessibilitySettings::default(),
            pseudonym: PseudonymSettings::default(),
            recipe: RecipeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the UI language, falling back to the system locale.
    pub fn resolve_language(&self) -> Language {
        self.language
            .as_deref()
            .and_then(Language::from_id)
            .unwrap_or_else(i18n::detect_system_locale)
    }
}

/// Accessibility-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    /// Deliver screen reader announcements
    pub announcements_enabled: bool,
    /// Navigation mode of the recipe card after start-up
    pub initial_mode: NavigationMode,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            announcements_enabled: true,
            initial_mode: NavigationMode::Fast,
        }
    }
}

/// Pseudonym form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudonymSettings {
    /// Minimum pseudonym length in characters
    pub min_length: usize,
}

impl Default for PseudonymSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Recipe card content overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeSettings {
    /// Recipe title; translated default when unset
    pub title: Option<String>,
    /// Recipe summary; translated default when unset
    pub summary: Option<String>,
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("fr", "opc", "RecipeA11y")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default path.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load application configuration from a file.
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save application configuration to a file.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
