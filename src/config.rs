use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{
    registry::{DEFAULT_ISBN_PREFIX, DuplicateIdPolicy},
    schema::SettingsConfig,
};

/// Registry configuration, read from JSON. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// ISBN given to every fresh project
    pub isbn_prefix: String,
    pub duplicate_ids: DuplicateIdPolicy,
    /// Replacement settings template. Relative paths are resolved against
    /// the directory of the config file by [`RegistryConfig::load`].
    pub settings_template: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            isbn_prefix: DEFAULT_ISBN_PREFIX.to_string(),
            duplicate_ids: DuplicateIdPolicy::default(),
            settings_template: None,
        }
    }
}

impl RegistryConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse registry config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let mut config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {:?}", path))?;

        let resolved = match (&config.settings_template, path.parent()) {
            (Some(template), Some(dir)) if template.is_relative() => Some(dir.join(template)),
            _ => None,
        };
        if resolved.is_some() {
            config.settings_template = resolved;
        }
        Ok(config)
    }

    /// The configured template, or the built-in one when none is set.
    pub fn settings_config(&self) -> anyhow::Result<SettingsConfig> {
        match &self.settings_template {
            Some(path) => SettingsConfig::from_path(path),
            None => Ok(SettingsConfig::builtin()),
        }
    }
}
