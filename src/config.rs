//! Application configuration, read from a TOML file.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [projection]
//! default_years = 100
//! max_years = 200
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::http_server::HttpServerConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Limits and defaults of birthday projections.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Years projected when a request omits `years_count`.
    #[serde(default = "default_years")]
    pub default_years: u32,
    /// Upper bound on `years_count`.
    #[serde(default = "default_max_years")]
    pub max_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_years: default_years(),
            max_years: default_max_years(),
        }
    }
}

fn default_years() -> u32 {
    100
}
fn default_max_years() -> u32 {
    200
}

impl AppConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file at `path`, or the defaults if `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        let p = &self.projection;
        ensure!(p.max_years > 0, "projection.max_years must be positive");
        ensure!(
            (1..=p.max_years).contains(&p.default_years),
            "projection.default_years must be within 1..={}",
            p.max_years
        );
        Ok(())
    }
}
