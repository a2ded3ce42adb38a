//! Configuration management for Vitrine.
//!
//! Parses `vitrine.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! All sections and fields are optional:
//!
//! ```toml
//! [site]
//! pages_dir = "pages"      # relative to the config file
//! shared_dir = "shared"
//!
//! [shared]
//! navigation = "navigation"   # document names, no extension
//! themes = "theme"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vitrine.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site directories (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Shared document names.
    pub shared: SharedDocsConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    pages_dir: Option<String>,
    shared_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory holding one YAML document per page.
    pub pages_dir: PathBuf,
    /// Directory holding the shared navigation and theme documents.
    pub shared_dir: PathBuf,
}

/// Shared document names (without extension).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SharedDocsConfig {
    /// Shared navigation document name.
    pub navigation: String,
    /// Shared theme-assignment document name.
    pub themes: String,
}

impl Default for SharedDocsConfig {
    fn default() -> Self {
        Self {
            navigation: "navigation".to_owned(),
            themes: "theme".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `vitrine.toml` in the current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            shared: SharedDocsConfig::default(),
            site_resolved: SiteConfig {
                pages_dir: base.join("pages"),
                shared_dir: base.join("shared"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.shared.navigation, "shared.navigation")?;
        require_non_empty(&self.shared.themes, "shared.themes")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            pages_dir: resolve(self.site.pages_dir.as_deref(), "pages"),
            shared_dir: resolve(self.site.shared_dir.as_deref(), "shared"),
        };
    }
}
