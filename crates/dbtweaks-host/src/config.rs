use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Host harness configuration, read from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    pub database: DatabaseConfig,
    pub configs: ConfigsConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub mods: ModsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory laid out like the server's `assets/database`.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigsConfig {
    /// Directory laid out like the server's `assets/configs`.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Patched tables are written to `<path>/database` and `<path>/configs`.
    pub path: PathBuf,
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Write `patch-report.json` next to the patched tables.
    #[serde(default = "default_true")]
    pub write_report: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModsConfig {
    /// Built-in modules to run, in order.
    #[serde(default = "default_enabled_mods")]
    pub enabled: Vec<String>,
    /// Extra profile files, run after the built-in modules.
    #[serde(default)]
    pub profiles: Vec<PathBuf>,
}

impl Default for ModsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_mods(),
            profiles: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_enabled_mods() -> Vec<String> {
    vec!["bois".to_string()]
}
