//! Configuration loading and management.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::analyzers::issues::DEFAULT_MAX_LINE_LENGTH;
use crate::core::{Error, Result};
use crate::stats::{SeriesConfig, TrendConfig};

const ENV_PREFIX: &str = "CRITIQUE_";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Issue detection thresholds.
    pub issues: IssuesConfig,
    /// Improvement trend windows.
    pub trend: TrendConfig,
    /// Time series window.
    pub series: SeriesConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Env vars with the `CRITIQUE_`
    /// prefix override file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::extract(
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::file_exact(path)),
        )
    }

    /// Load configuration from `critique.toml` or `.critique/critique.toml`
    /// under `dir`. Missing files are skipped.
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::extract(
            Figment::from(Serialized::defaults(Self::default()))
                .merge(Toml::file(dir.join("critique.toml")))
                .merge(Toml::file(dir.join(".critique/critique.toml"))),
        )
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.issues.max_line_length == 0 {
            return Err(Error::config("issues.max_line_length must be positive"));
        }
        if self.trend.window == 0 {
            return Err(Error::config("trend.window must be positive"));
        }
        if self.trend.threshold.is_nan() || self.trend.threshold < 0.0 {
            return Err(Error::config("trend.threshold must be non-negative"));
        }
        Ok(())
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Commented default config file content.
    pub fn default_toml() -> &'static str {
        include_str!("default_config.toml")
    }
}

/// Issue detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesConfig {
    /// Lines longer than this many characters are reported.
    pub max_line_length: usize,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format.
    #[default]
    Json,
    /// Markdown format.
    Markdown,
    /// Human-readable text.
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown format: {s}. Use 'json', 'markdown', or 'text'")),
        }
    }
}
