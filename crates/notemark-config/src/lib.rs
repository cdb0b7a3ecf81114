//! Configuration management for notemark.
//!
//! Parses `notemark.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! header_max_len = 60
//! indent_em = 1.5
//!
//! [highlight]
//! style = "background: #ffeb3b; padding: 0.1rem 0.2rem;"
//! ```

use notemark_renderer::{DEFAULT_HEADER_MAX_LEN, DEFAULT_INDENT_EM, DEFAULT_MARK_STYLE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override header length threshold.
    pub header_max_len: Option<usize>,
    /// Override bullet indent multiplier.
    pub indent_em: Option<f64>,
    /// Override `<mark>` style for search highlighting.
    pub highlight_style: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "notemark.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Note rendering configuration.
    pub render: RenderConfig,
    /// Search highlighting configuration.
    pub highlight: HighlightConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Note rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Lines shorter than this many characters may be treated as headers.
    pub header_max_len: usize,
    /// Left margin in `em` per indent character of a bullet.
    pub indent_em: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_max_len: DEFAULT_HEADER_MAX_LEN,
            indent_em: DEFAULT_INDENT_EM,
        }
    }
}

/// Search highlighting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Inline CSS applied to `<mark>` elements.
    pub style: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_MARK_STYLE.to_owned(),
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `notemark.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, and the merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(header_max_len) = settings.header_max_len {
            self.render.header_max_len = header_max_len;
        }
        if let Some(indent_em) = settings.indent_em {
            self.render.indent_em = indent_em;
        }
        if let Some(style) = &settings.highlight_style {
            self.highlight.style.clone_from(style);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_render()?;
        self.validate_highlight()?;
        Ok(())
    }

    fn validate_render(&self) -> Result<(), ConfigError> {
        if self.render.header_max_len == 0 {
            return Err(ConfigError::Validation(
                "render.header_max_len must be greater than 0".to_owned(),
            ));
        }
        if !self.render.indent_em.is_finite() || self.render.indent_em <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "render.indent_em must be a positive number, got {}",
                self.render.indent_em
            )));
        }
        Ok(())
    }

    fn validate_highlight(&self) -> Result<(), ConfigError> {
        let style = &self.highlight.style;
        if style.trim().is_empty() {
            return Err(ConfigError::Validation(
                "highlight.style cannot be empty".to_owned(),
            ));
        }
        if style.contains(['"', '<', '>']) {
            return Err(ConfigError::Validation(
                "highlight.style cannot contain '\"', '<' or '>'".to_owned(),
            ));
        }
        Ok(())
    }
}
