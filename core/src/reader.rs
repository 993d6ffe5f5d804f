//! Forced parsing of a single file into an in-memory data set
//!
//! Files are accepted with or without the 128-byte preamble, and with or
//! without a file meta group. A bare data set is read as little endian, with
//! explicit VR when the first element header carries a VR code and implicit VR
//! otherwise.

use crate::error::{DcmMetaError, Result};
use dicom::transfer_syntax::entries::{EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN};
use dicom_core::VR;
use dicom_object::InMemDicomObject;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";
const HEADER_LEN: usize = PREAMBLE_LEN + MAGIC.len();

/// Byte layout of a candidate DICOM file, detected from its first bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// 128-byte preamble, "DICM", file meta group, data set
    Preamble,
    /// "DICM", file meta group, data set
    MetaOnly,
    /// Bare data set in Explicit VR Little Endian
    ExplicitDataset,
    /// Bare data set in Implicit VR Little Endian
    ImplicitDataset,
}

impl Layout {
    /// Detects the layout from up to the first 132 bytes of a file
    pub fn detect(header: &[u8]) -> Self {
        if header.len() >= HEADER_LEN && &header[PREAMBLE_LEN..HEADER_LEN] == MAGIC {
            Layout::Preamble
        } else if header.starts_with(MAGIC) {
            Layout::MetaOnly
        } else if header.len() >= 6 && VR::from_binary([header[4], header[5]]).is_some() {
            Layout::ExplicitDataset
        } else {
            Layout::ImplicitDataset
        }
    }

    /// Number of leading bytes to skip before handing the stream to the parser
    fn skip(&self) -> usize {
        match self {
            Layout::Preamble => PREAMBLE_LEN,
            _ => 0,
        }
    }
}

/// Reads a DICOM file without requiring a preamble or file meta group
///
/// The file is opened once; the handle is released when this returns,
/// on success and on error alike.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the parser rejects its content
pub fn read_forced(path: &Path) -> Result<InMemDicomObject> {
    let mut file = BufReader::new(File::open(path)?);

    let mut header = Vec::with_capacity(HEADER_LEN);
    file.by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;

    let layout = Layout::detect(&header);
    debug!("Detected {:?} layout for {}", layout, path.display());

    let mut head = Cursor::new(header);
    head.set_position(layout.skip() as u64);
    read_with_layout(head.chain(file), layout)
}

/// Parses a byte stream positioned at the start of the given layout
pub fn read_with_layout<R: Read>(source: R, layout: Layout) -> Result<InMemDicomObject> {
    match layout {
        Layout::Preamble | Layout::MetaOnly => dicom_object::from_reader(source)
            .map(|obj| obj.into_inner())
            .map_err(|e| DcmMetaError::Dicom(e.to_string())),
        Layout::ExplicitDataset => {
            InMemDicomObject::read_dataset_with_ts(source, &EXPLICIT_VR_LITTLE_ENDIAN.erased())
                .map_err(|e| DcmMetaError::Dicom(e.to_string()))
        }
        Layout::ImplicitDataset => {
            InMemDicomObject::read_dataset_with_ts(source, &IMPLICIT_VR_LITTLE_ENDIAN.erased())
                .map_err(|e| DcmMetaError::Dicom(e.to_string()))
        }
    }
}
