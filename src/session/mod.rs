mod message;
mod state;

use std::{fs, path::Path};

use anyhow::Context;
use tracing::debug;

use crate::core::registry::{ProjectId, ProjectRegistry};

pub use message::{Message, Outcome};
pub use state::Snapshot;

/// Applies form messages to a registry.
#[derive(Debug, Default)]
pub struct Session {
    registry: ProjectRegistry,
}

impl Session {
    pub fn new(registry: ProjectRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> ProjectRegistry {
        self.registry
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        debug!(?message, "session update");
        match message {
            Message::SetIsbn { isbn } => {
                self.registry.set_isbn(isbn);
                Outcome::Updated
            }
            Message::SetId { id } => {
                self.registry.set_id(id);
                Outcome::Updated
            }
            Message::AssignId => {
                let project = self.registry.current_project_mut();
                if project.id.is_none() {
                    project.id = Some(ProjectId::generate());
                }
                Outcome::Updated
            }
            Message::SetSetting { key, value } => {
                self.registry.set_setting(key, value);
                Outcome::Updated
            }
            Message::ClearSetting { key } => {
                self.registry.clear_setting(&key);
                Outcome::Updated
            }
            Message::ApplyDefaults => {
                self.registry.apply_template_defaults();
                Outcome::Updated
            }
            Message::AddProject => Outcome::Added {
                index: self.registry.add_project(),
            },
            Message::EditProject { id } => {
                if self.registry.edit_project(&id) {
                    Outcome::Selected
                } else {
                    Outcome::NotFound
                }
            }
        }
    }

    pub fn replay<I>(&mut self, messages: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Message>,
    {
        messages.into_iter().map(|m| self.update(m)).collect()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::from(&self.registry)
    }
}

/// Read a JSON array of messages.
pub fn load_script<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Message>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid script {:?}", path))
}
