//! Common types and traits for all record kinds

pub mod dates;
pub mod field_value;
pub mod list_record;
pub mod lookups;
pub mod reference;
pub mod resource;

// Re-exports
pub use field_value::FieldValue;
pub use list_record::ListRecord;
pub use lookups::{Lookups, UNRESOLVED};
pub use resource::Resource;
