use std::{fs, path::Path, sync::LazyLock};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::registry::SettingValue;

static BUILTIN: LazyLock<SettingsConfig> = LazyLock::new(|| SettingsConfig {
    sections: vec![Section {
        section_id: "ProjectInfo".to_string(),
        name: "Project Information".to_string(),
        description: "some desc".to_string(),
        settings: SettingDescriptor {
            name: "Project Media ID Code".to_string(),
            key: "projectName".to_string(),
            description: "desc".to_string(),
            setting_type: SettingType::String,
            value: SettingValue::String("book".to_string()),
        },
    }],
});

/// Declared type of a configurable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    String,
    Bool,
    Int,
    Float,
}

/// One configurable field: its label, key, type and default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    pub name: String,
    pub key: String,
    pub description: String,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    pub value: SettingValue,
}

impl SettingDescriptor {
    /// Whether `value` fits the declared type. Ints are accepted for floats.
    pub fn accepts(&self, value: &SettingValue) -> bool {
        matches!(
            (self.setting_type, value),
            (SettingType::String, SettingValue::String(_))
                | (SettingType::Bool, SettingValue::Bool(_))
                | (SettingType::Int, SettingValue::Int(_))
                | (SettingType::Float, SettingValue::Float(_) | SettingValue::Int(_))
        )
    }
}

/// Named group of settings shown together in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "sectionID")]
    pub section_id: String,
    pub name: String,
    pub description: String,
    pub settings: SettingDescriptor,
}

/// Read-only template describing every configurable project field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub sections: Vec<Section>,
}

impl SettingsConfig {
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse settings template")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings template {:?}", path))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid settings template {:?}", path))
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    pub fn descriptor(&self, key: &str) -> Option<&SettingDescriptor> {
        self.sections
            .iter()
            .map(|s| &s.settings)
            .find(|d| d.key == key)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.sections.iter().map(|s| &s.settings)
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
