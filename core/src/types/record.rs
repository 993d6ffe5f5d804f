use super::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flat metadata extracted from one DICOM file
///
/// Keys keep the order in which they were pushed, which is the order of the
/// field table. Serialization writes a JSON object in that same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataRecord {
    fields: Vec<(&'static str, FieldValue)>,
}

impl MetadataRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: &'static str, value: FieldValue) {
        self.fields.push((key, value));
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Renders the record as JSON with two-space indentation
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
