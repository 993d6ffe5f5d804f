use crate::error::Result;
use crate::extraction::{is_present, FIELDS, FILE_SIZE_KEY};
use crate::reader::read_forced;
use crate::types::{FieldValue, MetadataRecord};
use dicom_object::InMemDicomObject;
use log::{debug, info};
use std::path::Path;

/// Main extractor for DICOM metadata
///
/// Provides a high-level API for extracting the fixed set of patient, study,
/// series, instance, geometry, windowing and equipment fields from a DICOM file.
///
/// # Example
///
/// ```
/// use dcmmeta_core::{FieldValue, MetadataExtractor};
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let mut dcm = InMemDicomObject::new_empty();
///
/// // Required identifiers
/// dcm.put(DataElement::new(Tag(0x0020, 0x000D), VR::UI, PrimitiveValue::from("1.2.3")));
/// dcm.put(DataElement::new(Tag(0x0020, 0x000E), VR::UI, PrimitiveValue::from("1.2.3.4")));
/// dcm.put(DataElement::new(Tag(0x0008, 0x0018), VR::UI, PrimitiveValue::from("1.2.3.4.5")));
/// dcm.put(DataElement::new(Tag(0x0008, 0x0016), VR::UI, PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.2")));
///
/// // Modality
/// dcm.put(DataElement::new(Tag(0x0008, 0x0060), VR::CS, PrimitiveValue::from("CT")));
///
/// let record = MetadataExtractor::extract_from_object(&dcm, 1024).unwrap();
///
/// assert_eq!(record.get("modality"), Some(&FieldValue::from("CT")));
/// assert_eq!(record.get("patientName"), Some(&FieldValue::from("Unknown")));
/// assert_eq!(record.get("sliceLocation"), Some(&FieldValue::Null));
/// assert_eq!(record.get("fileSize"), Some(&FieldValue::Integer(1024)));
/// ```
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extracts all metadata fields from a DICOM file
    ///
    /// The file is parsed in forced mode, so a missing preamble or file meta
    /// group is tolerated. `fileSize` is taken from the filesystem, not from
    /// the parsed content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or parsed
    /// - A required unique identifier is missing
    /// - A present value cannot be coerced to its field type
    pub fn extract<P: AsRef<Path>>(path: P) -> Result<MetadataRecord> {
        let path = path.as_ref();
        let dcm = read_forced(path)?;
        let mut record = Self::extract_fields(&dcm)?;

        let file_size = std::fs::metadata(path)?.len();
        record.push(FILE_SIZE_KEY, Self::file_size_value(file_size));

        info!("Extracted {} fields from {}", record.len(), path.display());
        Ok(record)
    }

    /// Extracts metadata from an already-parsed data set
    ///
    /// `file_size` is reported verbatim as `fileSize`.
    pub fn extract_from_object(dcm: &InMemDicomObject, file_size: u64) -> Result<MetadataRecord> {
        let mut record = Self::extract_fields(dcm)?;
        record.push(FILE_SIZE_KEY, Self::file_size_value(file_size));
        Ok(record)
    }

    /// Reads every entry of the field table, failing on the first error
    fn extract_fields(dcm: &InMemDicomObject) -> Result<MetadataRecord> {
        let mut record = MetadataRecord::with_capacity(FIELDS.len() + 1);
        for spec in FIELDS.iter() {
            record.push(spec.key, spec.extract(dcm)?);
        }

        debug!(
            "{} of {} tagged fields present",
            FIELDS
                .iter()
                .filter(|spec| is_present(dcm, spec.tag))
                .count(),
            FIELDS.len()
        );
        Ok(record)
    }

    fn file_size_value(file_size: u64) -> FieldValue {
        // i64::MAX bytes is far beyond any real file
        FieldValue::Integer(i64::try_from(file_size).unwrap_or(i64::MAX))
    }
}
