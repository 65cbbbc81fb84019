//! models module
pub mod model_definition;

/// Re-export data models
pub use model_definition::{DEFAULT_FIELD_TYPE, FieldDescriptor, parse_limit};
