use crate::error::{DcmMetaError, Result};
use crate::types::FieldValue;
use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_object::InMemDicomObject;
use std::fmt;

use super::coerce;
use super::tags::{lookup, lookup_or, RawValue};

/// Output key of the trailing field that is read from the filesystem
pub const FILE_SIZE_KEY: &str = "fileSize";

/// Output type and absence policy of one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// String that must be present; absence fails the whole extraction
    RequiredText,
    /// String with a default used when the tag is absent
    Text(&'static str),
    /// Integer with a default used when the tag is absent
    Integer(i64),
    /// Float with a default used when the tag is absent, never null
    Float(f64),
    /// Float, or null when the tag is absent
    NullableFloat,
    /// First value of a possibly multi-valued element, or null when absent
    NullableFirstFloat,
    /// All values as floats in stored order, or null when absent
    NullableFloats,
}

/// Logical grouping of fields, used for the text report headings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Patient,
    Study,
    Series,
    Instance,
    Modality,
    Image,
    Spatial,
    Windowing,
    Physicians,
    Institution,
    Equipment,
    File,
}

impl FieldGroup {
    pub fn simple_name(&self) -> &'static str {
        match self {
            FieldGroup::Patient => "Patient",
            FieldGroup::Study => "Study",
            FieldGroup::Series => "Series",
            FieldGroup::Instance => "Instance",
            FieldGroup::Modality => "Modality",
            FieldGroup::Image => "Image",
            FieldGroup::Spatial => "Spatial",
            FieldGroup::Windowing => "Windowing",
            FieldGroup::Physicians => "Physicians",
            FieldGroup::Institution => "Institution",
            FieldGroup::Equipment => "Equipment",
            FieldGroup::File => "File",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// One row of the field table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// camelCase key in the output record
    pub key: &'static str,
    /// Source attribute
    pub tag: Tag,
    /// DICOM keyword of `tag`, used in error messages
    pub keyword: &'static str,
    pub kind: FieldKind,
    pub group: FieldGroup,
}

impl FieldSpec {
    const fn new(
        group: FieldGroup,
        key: &'static str,
        tag: Tag,
        keyword: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            key,
            tag,
            keyword,
            kind,
            group,
        }
    }

    /// Reads this field from a data set, applying its default and coercion
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a required field is absent
    /// - a present value cannot be coerced to the field type
    pub fn extract(&self, dcm: &InMemDicomObject) -> Result<FieldValue> {
        let keyword = self.keyword;
        match self.kind {
            FieldKind::RequiredText => {
                let elem = lookup(dcm, self.tag).ok_or(DcmMetaError::MissingAttribute {
                    keyword,
                    tag: self.tag,
                })?;
                coerce::text(elem, keyword).map(FieldValue::Text)
            }
            FieldKind::Text(default) => match lookup_or(dcm, self.tag, default) {
                RawValue::Found(elem) => coerce::text(elem, keyword).map(FieldValue::Text),
                RawValue::Default(d) => Ok(FieldValue::from(d)),
            },
            FieldKind::Integer(default) => match lookup_or(dcm, self.tag, default) {
                RawValue::Found(elem) => coerce::integer(elem, keyword).map(FieldValue::Integer),
                RawValue::Default(d) => Ok(FieldValue::Integer(d)),
            },
            FieldKind::Float(default) => match lookup_or(dcm, self.tag, default) {
                RawValue::Found(elem) => coerce::float(elem, keyword).map(FieldValue::Float),
                RawValue::Default(d) => Ok(FieldValue::Float(d)),
            },
            FieldKind::NullableFloat => match lookup_or(dcm, self.tag, FieldValue::Null) {
                RawValue::Found(elem) => coerce::float(elem, keyword).map(FieldValue::Float),
                RawValue::Default(null) => Ok(null),
            },
            FieldKind::NullableFirstFloat => match lookup_or(dcm, self.tag, FieldValue::Null) {
                RawValue::Found(elem) => coerce::first_float(elem, keyword).map(FieldValue::Float),
                RawValue::Default(null) => Ok(null),
            },
            FieldKind::NullableFloats => match lookup_or(dcm, self.tag, FieldValue::Null) {
                RawValue::Found(elem) => coerce::floats(elem, keyword).map(FieldValue::Floats),
                RawValue::Default(null) => Ok(null),
            },
        }
    }
}

use FieldGroup as G;
use FieldKind as K;

/// Every tag-backed output field, in output order
///
/// `fileSize` is appended after these and is not part of the table.
#[rustfmt::skip]
pub static FIELDS: [FieldSpec; 41] = [
    // Patient
    FieldSpec::new(G::Patient, "patientName", tags::PATIENT_NAME, "PatientName", K::Text("Unknown")),
    FieldSpec::new(G::Patient, "patientId", tags::PATIENT_ID, "PatientID", K::Text("Unknown")),
    FieldSpec::new(G::Patient, "gender", tags::PATIENT_SEX, "PatientSex", K::Text("U")),
    FieldSpec::new(G::Patient, "dateOfBirth", tags::PATIENT_BIRTH_DATE, "PatientBirthDate", K::Text("")),
    // Study
    FieldSpec::new(G::Study, "studyInstanceUID", tags::STUDY_INSTANCE_UID, "StudyInstanceUID", K::RequiredText),
    FieldSpec::new(G::Study, "studyDate", tags::STUDY_DATE, "StudyDate", K::Text("")),
    FieldSpec::new(G::Study, "studyTime", tags::STUDY_TIME, "StudyTime", K::Text("")),
    FieldSpec::new(G::Study, "studyDescription", tags::STUDY_DESCRIPTION, "StudyDescription", K::Text("")),
    FieldSpec::new(G::Study, "studyId", tags::STUDY_ID, "StudyID", K::Text("")),
    FieldSpec::new(G::Study, "accessionNumber", tags::ACCESSION_NUMBER, "AccessionNumber", K::Text("")),
    // Series
    FieldSpec::new(G::Series, "seriesInstanceUID", tags::SERIES_INSTANCE_UID, "SeriesInstanceUID", K::RequiredText),
    FieldSpec::new(G::Series, "seriesNumber", tags::SERIES_NUMBER, "SeriesNumber", K::Integer(0)),
    FieldSpec::new(G::Series, "seriesDescription", tags::SERIES_DESCRIPTION, "SeriesDescription", K::Text("")),
    FieldSpec::new(G::Series, "seriesDate", tags::SERIES_DATE, "SeriesDate", K::Text("")),
    FieldSpec::new(G::Series, "seriesTime", tags::SERIES_TIME, "SeriesTime", K::Text("")),
    // Instance
    FieldSpec::new(G::Instance, "sopInstanceUID", tags::SOP_INSTANCE_UID, "SOPInstanceUID", K::RequiredText),
    FieldSpec::new(G::Instance, "sopClassUID", tags::SOP_CLASS_UID, "SOPClassUID", K::RequiredText),
    FieldSpec::new(G::Instance, "instanceNumber", tags::INSTANCE_NUMBER, "InstanceNumber", K::Integer(0)),
    // Modality
    FieldSpec::new(G::Modality, "modality", tags::MODALITY, "Modality", K::Text("")),
    FieldSpec::new(G::Modality, "bodyPartExamined", tags::BODY_PART_EXAMINED, "BodyPartExamined", K::Text("")),
    // Image geometry
    FieldSpec::new(G::Image, "rows", tags::ROWS, "Rows", K::Integer(0)),
    FieldSpec::new(G::Image, "columns", tags::COLUMNS, "Columns", K::Integer(0)),
    FieldSpec::new(G::Image, "bitsAllocated", tags::BITS_ALLOCATED, "BitsAllocated", K::Integer(0)),
    FieldSpec::new(G::Image, "bitsStored", tags::BITS_STORED, "BitsStored", K::Integer(0)),
    // Spatial
    FieldSpec::new(G::Spatial, "sliceLocation", tags::SLICE_LOCATION, "SliceLocation", K::NullableFloat),
    FieldSpec::new(G::Spatial, "sliceThickness", tags::SLICE_THICKNESS, "SliceThickness", K::NullableFloat),
    FieldSpec::new(G::Spatial, "pixelSpacing", tags::PIXEL_SPACING, "PixelSpacing", K::NullableFloats),
    FieldSpec::new(G::Spatial, "imagePosition", tags::IMAGE_POSITION_PATIENT, "ImagePositionPatient", K::NullableFloats),
    FieldSpec::new(G::Spatial, "imageOrientation", tags::IMAGE_ORIENTATION_PATIENT, "ImageOrientationPatient", K::NullableFloats),
    // Windowing
    FieldSpec::new(G::Windowing, "windowCenter", tags::WINDOW_CENTER, "WindowCenter", K::NullableFirstFloat),
    FieldSpec::new(G::Windowing, "windowWidth", tags::WINDOW_WIDTH, "WindowWidth", K::NullableFirstFloat),
    FieldSpec::new(G::Windowing, "rescaleIntercept", tags::RESCALE_INTERCEPT, "RescaleIntercept", K::Float(0.0)),
    FieldSpec::new(G::Windowing, "rescaleSlope", tags::RESCALE_SLOPE, "RescaleSlope", K::Float(1.0)),
    // Physicians
    FieldSpec::new(G::Physicians, "referringPhysician", tags::REFERRING_PHYSICIAN_NAME, "ReferringPhysicianName", K::Text("")),
    FieldSpec::new(G::Physicians, "performingPhysician", tags::PERFORMING_PHYSICIAN_NAME, "PerformingPhysicianName", K::Text("")),
    // Institution
    FieldSpec::new(G::Institution, "institutionName", tags::INSTITUTION_NAME, "InstitutionName", K::Text("")),
    FieldSpec::new(G::Institution, "departmentName", tags::INSTITUTIONAL_DEPARTMENT_NAME, "InstitutionalDepartmentName", K::Text("")),
    // Equipment
    FieldSpec::new(G::Equipment, "manufacturer", tags::MANUFACTURER, "Manufacturer", K::Text("")),
    FieldSpec::new(G::Equipment, "manufacturerModelName", tags::MANUFACTURER_MODEL_NAME, "ManufacturerModelName", K::Text("")),
    FieldSpec::new(G::Equipment, "stationName", tags::STATION_NAME, "StationName", K::Text("")),
    FieldSpec::new(G::Equipment, "softwareVersion", tags::SOFTWARE_VERSIONS, "SoftwareVersions", K::Text("")),
];

/// Looks up a field spec by its output key
pub fn field(key: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.key == key)
}
