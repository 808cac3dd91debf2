//! Configuration module for bookr
//!
//! Manages user preferences: which catalog to open, the page size and the
//! theme. Configuration is stored in the user's config directory
//! (`~/.config/bookr/config.toml` on Linux).
//!
//! Values are layered: a command-line flag beats the config file, which
//! beats the catalog file, which beats the built-in default.

use crate::catalog::{Catalog, CatalogError};
use crate::theme::{ThemeMode, ThemePreference};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookrConfig {
    /// Catalog file to open instead of the bundled sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Page size overriding the catalog's own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Startup theme (`auto`, `day` or `night`)
    #[serde(default)]
    pub theme: ThemePreference,

    /// Show key hints and the CLI hint in the browser
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for BookrConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            page_size: None,
            theme: ThemePreference::Auto,
            show_hints: true,
            quiet: false,
        }
    }
}

impl BookrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("bookr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it with defaults if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Same as [`BookrConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the page size
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::Message(
                "Page size must be at least 1".to_string(),
            ));
        }
        self.page_size = Some(page_size);
        Ok(())
    }

    /// Open the catalog these settings point at
    ///
    /// `path` and `page_size` are command-line overrides; when absent the
    /// configured values are used, then the catalog's own page size.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or is invalid, or
    /// if the effective page size is zero.
    pub fn open_catalog(
        &self,
        path: Option<&Path>,
        page_size: Option<usize>,
    ) -> Result<Catalog, CatalogError> {
        let catalog = match path.or(self.catalog.as_deref()) {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };

        match page_size.or(self.page_size) {
            Some(page_size) => catalog.with_page_size(page_size),
            None => Ok(catalog),
        }
    }

    /// Pick the startup theme
    ///
    /// A command-line preference beats the configured one; `auto` consults
    /// the ambient terminal hint.
    #[must_use]
    pub fn startup_theme(
        &self,
        cli: Option<ThemePreference>,
        ambient: Option<ThemeMode>,
    ) -> ThemeMode {
        cli.unwrap_or(self.theme).resolve(ambient)
    }
}
