mod model;
mod project;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::core::schema::SettingsConfig;

pub use model::SettingValue;
pub use project::{DEFAULT_ISBN_PREFIX, Project, ProjectId};

/// Which entry `edit_project` selects when several share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    FirstMatch,
    #[default]
    LastMatch,
}

/// The record the form is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentProject {
    /// Not yet added, owned by the registry.
    Draft(Project),
    /// Index into the project list. Edits go straight to that entry.
    Editing(usize),
}

#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    current: CurrentProject,
    projects: Vec<Project>,
    settings_config: SettingsConfig,
    isbn_prefix: String,
    duplicate_ids: DuplicateIdPolicy,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::with_settings_config(SettingsConfig::builtin())
    }

    pub fn with_settings_config(settings_config: SettingsConfig) -> Self {
        Self {
            current: CurrentProject::Draft(Project::new()),
            projects: Vec::new(),
            settings_config,
            isbn_prefix: DEFAULT_ISBN_PREFIX.to_string(),
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }

    /// Build a registry from configuration, loading the template file if one is set.
    pub fn with_config(config: &RegistryConfig) -> anyhow::Result<Self> {
        let mut registry = Self::with_settings_config(config.settings_config()?);
        let isbn_prefix = config.isbn_prefix.clone();
        registry.current = CurrentProject::Draft(Project::with_isbn(isbn_prefix.clone()));
        registry.isbn_prefix = isbn_prefix;
        registry.duplicate_ids = config.duplicate_ids;
        Ok(registry)
    }

    pub fn current(&self) -> &CurrentProject {
        &self.current
    }

    pub fn current_project(&self) -> &Project {
        match &self.current {
            CurrentProject::Draft(project) => project,
            CurrentProject::Editing(index) => &self.projects[*index],
        }
    }

    pub fn current_project_mut(&mut self) -> &mut Project {
        current_mut(&mut self.current, &mut self.projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn settings_config(&self) -> &SettingsConfig {
        &self.settings_config
    }

    pub fn duplicate_ids(&self) -> DuplicateIdPolicy {
        self.duplicate_ids
    }

    /// Append the current project to the list and start a fresh draft.
    ///
    /// When an existing entry is being edited, a copy of it is appended.
    /// Returns the index of the appended entry.
    pub fn add_project(&mut self) -> usize {
        let fresh = CurrentProject::Draft(Project::with_isbn(self.isbn_prefix.clone()));
        let archived = match std::mem::replace(&mut self.current, fresh) {
            CurrentProject::Draft(project) => project,
            CurrentProject::Editing(index) => self.projects[index].clone(),
        };
        self.projects.push(archived);

        let index = self.projects.len() - 1;
        debug!(index, isbn = %self.projects[index].isbn, "added project");
        index
    }

    /// Select the project with `id` for editing.
    ///
    /// Returns `false` and leaves the current project alone if nothing matches.
    /// Any unsaved draft is dropped when a match is found.
    pub fn edit_project(&mut self, id: &ProjectId) -> bool {
        debug!(%id, "edit project");
        match self.position_of(id) {
            Some(index) => {
                self.current = CurrentProject::Editing(index);
                true
            }
            None => {
                trace!(%id, "no project with this id");
                false
            }
        }
    }

    pub fn find_project(&self, id: &ProjectId) -> Option<&Project> {
        self.position_of(id).map(|index| &self.projects[index])
    }

    fn position_of(&self, id: &ProjectId) -> Option<usize> {
        let mut matches = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, project)| project.has_id(id))
            .map(|(index, _)| index);
        match self.duplicate_ids {
            DuplicateIdPolicy::FirstMatch => matches.next(),
            DuplicateIdPolicy::LastMatch => matches.last(),
        }
    }

    pub fn set_isbn(&mut self, isbn: impl Into<String>) {
        self.current_project_mut().isbn = isbn.into();
    }

    pub fn set_id(&mut self, id: impl Into<ProjectId>) {
        self.current_project_mut().id = Some(id.into());
    }

    pub fn set_setting(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.current_project_mut()
            .settings
            .insert(key.into(), value.into());
    }

    pub fn clear_setting(&mut self, key: &str) -> Option<SettingValue> {
        self.current_project_mut().settings.remove(key)
    }

    /// Fill in template defaults for keys the current project has not set.
    /// Returns how many keys were filled.
    pub fn apply_template_defaults(&mut self) -> usize {
        let project = current_mut(&mut self.current, &mut self.projects);
        let mut applied = 0;
        for descriptor in self.settings_config.descriptors() {
            if !project.settings.contains_key(&descriptor.key) {
                project
                    .settings
                    .insert(descriptor.key.clone(), descriptor.value.clone());
                applied += 1;
            }
        }
        applied
    }
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn current_mut<'a>(
    current: &'a mut CurrentProject,
    projects: &'a mut [Project],
) -> &'a mut Project {
    match current {
        CurrentProject::Draft(project) => project,
        CurrentProject::Editing(index) => &mut projects[*index],
    }
}
