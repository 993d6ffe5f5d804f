use dicom_core::Tag;
use thiserror::Error;

/// Result type for dcmmeta operations
pub type Result<T> = std::result::Result<T, DcmMetaError>;

/// Error types for metadata extraction
///
/// Every variant is fatal for the extraction: no partial record is ever
/// produced once one of these is raised.
#[derive(Error, Debug)]
pub enum DcmMetaError {
    /// The byte content could not be parsed as a DICOM data set
    #[error("DICOM error: {0}")]
    Dicom(String),

    /// A required unique identifier is not present in the data set
    #[error("Missing required attribute {keyword} {tag}")]
    MissingAttribute { keyword: &'static str, tag: Tag },

    /// A present attribute could not be coerced to the declared type
    #[error("Invalid value for {keyword}: {reason}")]
    InvalidValue {
        keyword: &'static str,
        reason: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DcmMetaError {
    pub(crate) fn invalid_value(keyword: &'static str, reason: impl ToString) -> Self {
        DcmMetaError::InvalidValue {
            keyword,
            reason: reason.to_string(),
        }
    }
}
