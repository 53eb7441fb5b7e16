use serde::{Deserialize, Serialize};

use crate::core::registry::{ProjectId, SettingValue};

/// Form events, one per user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Message {
    SetIsbn { isbn: String },
    SetId { id: ProjectId },
    /// Give the current project a generated id unless it already has one
    AssignId,
    SetSetting { key: String, value: SettingValue },
    ClearSetting { key: String },
    ApplyDefaults,
    AddProject,
    EditProject { id: ProjectId },
}

/// What a message did to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Added { index: usize },
    Selected,
    NotFound,
}
