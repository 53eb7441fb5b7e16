use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::registry::SettingValue;

/// ISBN every fresh project starts with.
pub const DEFAULT_ISBN_PREFIX: &str = "978-";

/// Externally assigned project key.
///
/// Numbers and strings share one representation, so `ProjectId::from(2u64)`
/// and `ProjectId::from("2")` are the same id. Whole floats such as `1.0`
/// become `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawProjectId", into = "String")]
pub struct ProjectId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectId {
    Number(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<RawProjectId> for ProjectId {
    fn from(raw: RawProjectId) -> Self {
        match raw {
            RawProjectId::Number(n) => ProjectId::from(n),
            RawProjectId::Signed(n) => ProjectId::from(n),
            RawProjectId::Float(n) => ProjectId::from(n),
            RawProjectId::Text(s) => ProjectId(s),
        }
    }
}

impl ProjectId {
    /// Random id for callers that have nothing better to assign.
    pub fn generate() -> Self {
        ProjectId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        ProjectId(value.to_string())
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        ProjectId(value.to_string())
    }
}

impl From<f64> for ProjectId {
    fn from(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            ProjectId::from(value as i64)
        } else {
            ProjectId(value.to_string())
        }
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        ProjectId(value.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        ProjectId(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book or publication record being configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
    pub isbn: String,
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
}

impl Project {
    pub fn new() -> Self {
        Self::with_isbn(DEFAULT_ISBN_PREFIX)
    }

    pub fn with_isbn(isbn: impl Into<String>) -> Self {
        Self {
            id: None,
            isbn: isbn.into(),
            settings: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ProjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn get_setting(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    pub fn has_id(&self, id: &ProjectId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}
