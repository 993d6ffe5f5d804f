//! Output types for extracted metadata
//!
//! - [`FieldValue`]: a JSON-safe value (string, integer, float, float vector or null)
//! - [`MetadataRecord`]: the ordered field-name to value mapping emitted per file

mod record;
mod value;

pub use record::MetadataRecord;
pub use value::FieldValue;
