pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod reader;
pub mod types;

pub use api::MetadataExtractor;
pub use cli::report::{ErrorReport, TextReport};
pub use error::{DcmMetaError, Result};
pub use extraction::{FieldGroup, FieldKind, FieldSpec, FIELDS, FILE_SIZE_KEY};
pub use types::*;
