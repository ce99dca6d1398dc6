// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = ".parastat.toml";

/// Workspace-level configuration, discovered by walking parent
/// directories from the scan root. Absent file means defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tags: TagPolicy,
    pub scan: ScanPolicy,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TagPolicy {
    /// Scan inline hashtags across the raw text, code and header
    /// included. `false` restricts the scan to the code-stripped body.
    pub include_code: bool,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self { include_code: true }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanPolicy {
    /// Extra directory names excluded from every scan.
    pub exclude: Vec<String>,
}

impl Config {
    /// Loads the nearest config file at or above `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or
    /// parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut current = Some(dir.to_path_buf());
        while let Some(candidate) = current {
            let config_file = candidate.join(CONFIG_FILE);
            if config_file.exists() {
                let content = fs::read_to_string(&config_file).with_context(|| {
                    format!("Failed to read config file: {}", config_file.display())
                })?;
                return toml::from_str(&content).with_context(|| {
                    format!("Failed to parse config file: {}", config_file.display())
                });
            }
            current = candidate.parent().map(Path::to_path_buf);
        }
        Ok(Self::default())
    }
}
