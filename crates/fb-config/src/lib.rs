//! Configuration management for the FizzBuzz newsletter tools.
//!
//! Parses `fizzbuzz.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings can be applied during
//! load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support `${VAR}` (error if unset) and `${VAR:-default}`.
//!
//! Expanded fields:
//! - `paths.output_dir`
//! - `paths.template`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fb_markup::Palette;
use fb_markup::palette::{CaptionStyle, ColorToken, PaletteTable, PanelStyle, PillStyle};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only `Some` values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the newsletter template path.
    pub template: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fizzbuzz.toml";

const DEFAULT_OUTPUT_DIR: &str = "email/output";
const DEFAULT_TEMPLATE: &str = "email/input/template.html";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paths as relative strings from TOML.
    paths: PathsConfigRaw,
    /// Per-token palette overrides.
    pub palette: PaletteConfig,

    /// Resolved paths (set after loading).
    #[serde(skip)]
    pub paths_resolved: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PathsConfigRaw {
    output_dir: Option<String>,
    template: Option<String>,
}

/// Resolved file locations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory holding `fizz_raw_*.html` inputs and assembled outputs.
    pub output_dir: PathBuf,
    /// Newsletter template with `{{...}}` placeholders.
    pub template: PathBuf,
}

/// Palette overrides keyed by color token name.
///
/// Entries replace the built-in record for their token; tokens not listed
/// keep their defaults. The key `default` replaces the table's fallback
/// record, used for unknown or missing `color` attributes.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PaletteConfig {
    pub pill: BTreeMap<String, PillStyle>,
    pub panel: BTreeMap<String, PanelStyle>,
    pub caption: BTreeMap<String, CaptionStyle>,
}

impl PaletteConfig {
    /// Check token names and style fields.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for unknown tokens or empty fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (token, style) in &self.pill {
            let field = require_token("pill", token)?;
            require_non_empty(&style.background, &format!("{field}.background"))?;
            require_non_empty(&style.color, &format!("{field}.color"))?;
        }
        for (token, style) in &self.panel {
            let field = require_token("panel", token)?;
            require_non_empty(&style.background, &format!("{field}.background"))?;
            require_non_empty(&style.border, &format!("{field}.border"))?;
            require_non_empty(&style.accent, &format!("{field}.accent"))?;
        }
        for (token, style) in &self.caption {
            let field = require_token("caption", token)?;
            require_non_empty(&style.background, &format!("{field}.background"))?;
            require_non_empty(&style.color, &format!("{field}.color"))?;
        }
        Ok(())
    }

    /// Apply the overrides on top of the default palette.
    ///
    /// Unknown token names are skipped; [`validate`](Self::validate) reports
    /// them when loading from a file.
    #[must_use]
    pub fn to_palette(&self) -> Palette {
        let mut palette = Palette::default();
        apply_overrides(&mut palette.pill, &self.pill);
        apply_overrides(&mut palette.panel, &self.panel);
        apply_overrides(&mut palette.caption, &self.caption);
        palette
    }
}

/// Key selecting a table's fallback record.
const FALLBACK_KEY: &str = "default";

fn apply_overrides<S: Clone>(table: &mut PaletteTable<S>, overrides: &BTreeMap<String, S>) {
    for (key, style) in overrides {
        if key.trim().eq_ignore_ascii_case(FALLBACK_KEY) {
            table.set_fallback(style.clone());
        } else if let Some(token) = ColorToken::parse(key) {
            table.insert(token, style.clone());
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`paths.template`").
        field: String,
        /// Error message (e.g., "${`FIZZ_HOME`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a palette key to name a known color token; returns its field path.
fn require_token(table: &str, token: &str) -> Result<String, ConfigError> {
    let field = format!("palette.{table}.{token}");
    if ColorToken::parse(token).is_none() && !token.trim().eq_ignore_ascii_case(FALLBACK_KEY) {
        let known: Vec<_> = ColorToken::ALL.iter().map(|t| t.as_str()).collect();
        return Err(ConfigError::Validation(format!(
            "{field}: unknown color token (expected one of {} or {FALLBACK_KEY})",
            known.join(", ")
        )));
    }
    Ok(field)
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `fizzbuzz.toml` in the current directory and its parents, falling
    /// back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after path resolution.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or loading fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Palette with the configured overrides applied.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette.to_palette()
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(template) = &settings.template {
            self.paths_resolved.template.clone_from(template);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths_resolved.output_dir.clone_from(output_dir);
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

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            paths: PathsConfigRaw::default(),
            palette: PaletteConfig::default(),
            paths_resolved: PathsConfig {
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
                template: base.join(DEFAULT_TEMPLATE),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output_dir) = &self.paths.output_dir {
            require_non_empty(output_dir, "paths.output_dir")?;
        }
        if let Some(template) = &self.paths.template {
            require_non_empty(template, "paths.template")?;
        }
        self.palette.validate()
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref output_dir) = self.paths.output_dir {
            self.paths.output_dir = Some(expand::expand_env(output_dir, "paths.output_dir")?);
        }
        if let Some(ref template) = self.paths.template {
            self.paths.template = Some(expand::expand_env(template, "paths.template")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths_resolved = PathsConfig {
            output_dir: resolve(self.paths.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            template: resolve(self.paths.template.as_deref(), DEFAULT_TEMPLATE),
        };
    }
}
