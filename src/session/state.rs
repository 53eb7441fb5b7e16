use serde::Serialize;

use crate::core::{
    registry::{CurrentProject, Project, ProjectRegistry},
    schema::SettingsConfig,
};

/// Serializable view of everything the form binds to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub current_project: &'a Project,
    /// Index of the entry being edited, `None` while on a draft
    pub editing: Option<usize>,
    pub projects: &'a [Project],
    pub settings_config: &'a SettingsConfig,
}

impl<'a> From<&'a ProjectRegistry> for Snapshot<'a> {
    fn from(registry: &'a ProjectRegistry) -> Self {
        let editing = match registry.current() {
            CurrentProject::Draft(_) => None,
            CurrentProject::Editing(index) => Some(*index),
        };
        Self {
            current_project: registry.current_project(),
            editing,
            projects: registry.projects(),
            settings_config: registry.settings_config(),
        }
    }
}
