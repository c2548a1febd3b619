//! Runtime settings for the binary.
//!
//! Layered as: built-in defaults, then `linggloss.toml` (or the file named by
//! `LINGGLOSS_CONFIG`) if it exists, then `LINGGLOSS__SECTION__KEY`
//! environment variables.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "linggloss.toml";
pub const CONFIG_PATH_VAR: &str = "LINGGLOSS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: "info".into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagnosticSettings {
    /// Diagnostics are appended to this file, one line each.
    pub path: Option<String>,
    /// Also forward diagnostics as tracing events.
    pub tracing: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { listen: "127.0.0.1:8080".into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: LogSettings,
    pub diagnostics: DiagnosticSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Reads the configured file (if present) and the environment.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let settings = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("LINGGLOSS").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Settings from TOML text alone, ignoring the environment.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
