use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the stock configuration: thresholds 80/80/85, service `nginx`, log tag
/// `monitoring`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Alert thresholds for resource metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_cpu_percent")]
    pub cpu_percent: f64,
    #[serde(default = "default_memory_percent")]
    pub memory_percent: f64,
    #[serde(default = "default_disk_percent")]
    pub disk_percent: f64,
}

/// The service unit to watch and restart when down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
}

/// System log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Tag the summary line is written under, so downstream collectors can
    /// filter on it.
    #[serde(default = "default_log_tag")]
    pub tag: String,
}

// --- Defaults ---

const fn default_cpu_percent() -> f64 {
    80.0
}

const fn default_memory_percent() -> f64 {
    80.0
}

const fn default_disk_percent() -> f64 {
    85.0
}

fn default_service_name() -> String {
    "nginx".into()
}

fn default_log_tag() -> String {
    "monitoring".into()
}

// --- Default impls ---

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu_percent: default_cpu_percent(),
            memory_percent: default_memory_percent(),
            disk_percent: default_disk_percent(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: default_log_tag(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// The threshold value object handed to the evaluator.
    #[must_use]
    pub const fn thresholds(&self) -> ThresholdSet {
        ThresholdSet {
            cpu_percent: self.thresholds.cpu_percent,
            memory_percent: self.thresholds.memory_percent,
            disk_percent: self.thresholds.disk_percent,
        }
    }
}
