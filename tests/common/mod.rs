mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from rapuma_settings for tests
pub use rapuma_settings::{
    CurrentProject, DuplicateIdPolicy, Message, Outcome, Project, ProjectId, ProjectRegistry,
    RegistryConfig, Session, SettingValue, SettingsConfig,
};
