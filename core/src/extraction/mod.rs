pub mod coerce;
pub mod fields;
pub mod tags;

pub use fields::{field, FieldGroup, FieldKind, FieldSpec, FIELDS, FILE_SIZE_KEY};
pub use tags::{is_present, lookup, lookup_or, RawValue};
