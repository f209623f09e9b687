use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "insurance-age.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Timezone used to resolve "today" when no reference date is given.
    #[serde(default = "default_timezone", deserialize_with = "deserialize_tz")]
    pub timezone: Tz,

    /// Output format for the command-line report.
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            format: OutputFormat::default(),
        }
    }
}

fn default_timezone() -> Tz {
    chrono_tz::Asia::Taipei
}

fn deserialize_tz<'de, D>(deserializer: D) -> std::result::Result<Tz, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timezone(&s).map_err(serde::de::Error::custom)
}

/// Parses an IANA timezone name such as `Asia/Taipei`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name).map_err(|_| anyhow::anyhow!("invalid timezone: {name}"))
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse config")
    }

    /// Loads `path`, falling back to defaults when it does not exist and
    /// `required` is false.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), timezone = %config.timezone, "loaded config");
        Ok(config)
    }
}
