pub mod registry;
pub mod schema;
