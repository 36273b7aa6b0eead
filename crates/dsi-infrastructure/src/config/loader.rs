//! Configuration loader
//!
//! Loads [`AppConfig`] from defaults, a TOML file and the environment using
//! Figment.

use std::env;
use std::path::{Path, PathBuf};

use dsi_domain::error::Result;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::warn;

use crate::config::{AppConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    PLUGIN_DIR_KEY,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// An explicit configuration path that does not exist is logged and
    /// skipped, not an error.
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Load configuration, replacing only the sections that are invalid
    ///
    /// Invalid logging settings fall back to [`LoggingConfig::default`]. If
    /// the sources cannot be extracted at all, the plugin directory is still
    /// taken from them when it is readable on its own.
    pub fn load_lenient(&self) -> AppConfig {
        let figment = self.figment();
        let mut app_config = match figment.extract::<AppConfig>() {
            Ok(app_config) => app_config,
            Err(error) => {
                warn!(%error, "Failed to load configuration, using defaults");
                AppConfig {
                    plugin_dir: figment
                        .extract_inner::<String>(PLUGIN_DIR_KEY)
                        .ok()
                        .or_else(|| self.plugin_dir_from_env())
                        .unwrap_or_default(),
                    ..AppConfig::default()
                }
            }
        };

        if let Err(error) = validate_logging_config(&app_config.logging) {
            warn!(%error, "Invalid logging configuration, using default logging");
            app_config.logging = LoggingConfig::default();
        }
        app_config
    }

    /// Value of the plugin directory environment variable, verbatim
    pub fn plugin_dir_from_env(&self) -> Option<String> {
        env::var_os(format!(
            "{}_{}",
            self.env_prefix,
            PLUGIN_DIR_KEY.to_ascii_uppercase()
        ))
        .map(|value| value.to_string_lossy().into_owned())
    }

    fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => log_config_loaded(config_path, false),
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // DSI_LOGGING__LEVEL -> logging.level
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR)
                .ignore(&[PLUGIN_DIR_KEY]),
        );

        // DSI_PLUGIN_DIR is a path, never a typed value
        if let Some(plugin_dir) = self.plugin_dir_from_env() {
            figment = figment.merge(Serialized::default(PLUGIN_DIR_KEY, plugin_dir));
        }
        figment
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Default configuration file locations, in lookup order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
            candidates.push(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(
                config_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(
                home.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }
        candidates
    }

    fn find_default_config_path() -> Option<PathBuf> {
        Self::default_config_paths()
            .into_iter()
            .find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level)?;
    Ok(())
}
