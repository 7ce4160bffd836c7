//! Environment-driven configuration for the `warehouse` binary.

use core::str::FromStr;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use warehouse_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "WAREHOUSE_LOG_FORMAT";
pub const REPORT_FORMAT_VAR: &str = "WAREHOUSE_REPORT_FORMAT";
pub const SEED_VAR: &str = "WAREHOUSE_SEED";

/// How inventory listings are rendered on stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown report format '{other}' (expected 'text' or 'json')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub report_format: ReportFormat,
    pub seed: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            report_format: ReportFormat::Text,
            seed: true,
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {LOG_FORMAT_VAR}"))?;
        }
        if let Some(raw) = lookup(REPORT_FORMAT_VAR) {
            config.report_format = raw
                .parse()
                .with_context(|| format!("invalid {REPORT_FORMAT_VAR}"))?;
        }
        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = parse_bool(&raw).with_context(|| format!("invalid {SEED_VAR}"))?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}
