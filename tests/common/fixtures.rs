use std::io::Write;

use rapuma_settings::{ProjectId, ProjectRegistry};
use tempfile::NamedTempFile;

/// Adds a project with the given id and ISBN through the form operations.
/// Returns the index it landed at.
pub fn add_project(registry: &mut ProjectRegistry, id: u64, isbn: &str) -> usize {
    registry.set_id(id);
    registry.set_isbn(isbn);
    registry.add_project()
}

/// Registry holding `{id: 1, isbn: "978-A"}` and `{id: 2, isbn: "978-B"}`.
pub fn registry_with_two_projects() -> ProjectRegistry {
    let mut registry = ProjectRegistry::new();
    add_project(&mut registry, 1, "978-A");
    add_project(&mut registry, 2, "978-B");
    registry
}

pub fn id(value: u64) -> ProjectId {
    ProjectId::from(value)
}

/// Writes `contents` to a temp file with the given suffix.
/// The file will be automatically cleaned up when dropped.
pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

pub const LAYOUT_TEMPLATE: &str = r#"{
    "sections": [
        {
            "sectionID": "ProjectInfo",
            "name": "Project Information",
            "description": "Basic project data",
            "settings": {
                "name": "Project Media ID Code",
                "key": "projectName",
                "description": "Media code",
                "type": "string",
                "value": "book"
            }
        },
        {
            "sectionID": "Layout",
            "name": "Layout",
            "description": "Page layout",
            "settings": {
                "name": "Columns",
                "key": "columns",
                "description": "Number of text columns",
                "type": "int",
                "value": 2
            }
        }
    ]
}"#;
