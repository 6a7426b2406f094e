//! Configuration for the `machinedream` binary
//!
//! Read from `machinedream.toml`. Every section is optional and falls back to
//! defaults, and a missing file is the same as an empty one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "machinedream.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub memory: MemorySection,
    #[serde(default)]
    pub rng: RngSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySection {
    /// Where recorded insights are saved; `machine_dream_memory.json` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RngSection {
    /// Fixed seed; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. "warn" or "machine_dream=debug"
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.log_filter().with_context(|| {
            format!(
                "Invalid [logging] level {:?} in config: {}",
                config.logging.level,
                path.display()
            )
        })?;
        Ok(config)
    }

    /// `tracing` filter built from `[logging] level`
    pub fn log_filter(&self) -> Result<EnvFilter> {
        Ok(EnvFilter::try_new(&self.logging.level)?)
    }
}
