use crate::extraction::{FieldGroup, FIELDS, FILE_SIZE_KEY};
use crate::types::MetadataRecord;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fmt;
use std::io;
use std::path::Path;

/// Failure report written to stderr
///
/// `file_path` is only set for failures that happen after the path was
/// validated, i.e. during extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl ErrorReport {
    /// Creates a report carrying only a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            file_path: None,
        }
    }

    /// Creates a report for a failed extraction of `path`
    pub fn for_file(error: impl Into<String>, path: &Path) -> Self {
        Self {
            error: error.into(),
            file_path: Some(path.display().to_string()),
        }
    }

    /// Renders the report as a single-line JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the report followed by a newline
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.to_json()?)?;
        writer.flush()
    }
}

/// Compact JSON with a space after `:` and `,`
///
/// Produces `{"error": "File not found"}` rather than serde_json's default
/// `{"error":"File not found"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Text report formatter for extracted metadata
pub struct TextReport<'a> {
    record: &'a MetadataRecord,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(record: &'a MetadataRecord) -> Self {
        Self { record }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DICOM Metadata")?;
        writeln!(f, "==============")?;

        let mut current: Option<FieldGroup> = None;
        for spec in FIELDS.iter() {
            if current != Some(spec.group) {
                writeln!(f)?;
                writeln!(f, "{}", spec.group)?;
                writeln!(f, "{}", "-".repeat(spec.group.simple_name().len()))?;
                current = Some(spec.group);
            }
            if let Some(value) = self.record.get(spec.key) {
                writeln!(f, "{:<28}{}", format!("{}:", spec.keyword), value)?;
            }
        }

        if let Some(size) = self.record.get(FILE_SIZE_KEY) {
            writeln!(f)?;
            writeln!(f, "{}", FieldGroup::File)?;
            writeln!(f, "----")?;
            writeln!(f, "{:<28}{} bytes", "FileSize:", size)?;
        }

        Ok(())
    }
}
