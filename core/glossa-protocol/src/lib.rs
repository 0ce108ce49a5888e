pub mod fields;
pub mod model;

// Re-export core types for convenience
pub use fields::FieldSet;
pub use model::*;
