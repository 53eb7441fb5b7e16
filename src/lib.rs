pub mod config;
pub mod core;
pub mod logging;
pub mod session;

pub use config::RegistryConfig;
pub use crate::core::registry::{
    CurrentProject, DuplicateIdPolicy, Project, ProjectId, ProjectRegistry, SettingValue,
};
pub use crate::core::schema::{Section, SettingDescriptor, SettingType, SettingsConfig};
pub use session::{Message, Outcome, Session, Snapshot};
