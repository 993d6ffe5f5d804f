#![allow(dead_code)]

use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_dictionary_std::tags;
use dicom_object::meta::FileMetaTableBuilder;
use dicom_object::InMemDicomObject;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";
pub const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";

pub fn put_str(dcm: &mut InMemDicomObject, tag: Tag, vr: VR, value: &str) {
    dcm.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
}

pub fn put_strs(dcm: &mut InMemDicomObject, tag: Tag, vr: VR, values: &[&str]) {
    dcm.put(DataElement::new(
        tag,
        vr,
        PrimitiveValue::Strs(values.iter().map(|s| s.to_string()).collect()),
    ));
}

pub fn put_u16(dcm: &mut InMemDicomObject, tag: Tag, value: u16) {
    dcm.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
}

/// Data set with only the four required identifiers
pub fn create_minimal_dicom() -> InMemDicomObject {
    let mut dcm = InMemDicomObject::new_empty();
    put_str(&mut dcm, tags::SOP_CLASS_UID, VR::UI, CT_IMAGE_STORAGE);
    put_str(&mut dcm, tags::SOP_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2.1");
    put_str(&mut dcm, tags::STUDY_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2");
    put_str(&mut dcm, tags::SERIES_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2.9");
    dcm
}

/// Data set with every extracted attribute populated
pub fn create_full_dicom() -> InMemDicomObject {
    let mut dcm = create_minimal_dicom();
    put_str(&mut dcm, tags::PATIENT_NAME, VR::PN, "Doe^Jane");
    put_str(&mut dcm, tags::PATIENT_ID, VR::LO, "PID-0001");
    put_str(&mut dcm, tags::PATIENT_SEX, VR::CS, "F");
    put_str(&mut dcm, tags::PATIENT_BIRTH_DATE, VR::DA, "19800101");
    put_str(&mut dcm, tags::STUDY_DATE, VR::DA, "20240315");
    put_str(&mut dcm, tags::STUDY_TIME, VR::TM, "101500");
    put_str(&mut dcm, tags::STUDY_DESCRIPTION, VR::LO, "CT CHEST");
    put_str(&mut dcm, tags::STUDY_ID, VR::SH, "S1");
    put_str(&mut dcm, tags::ACCESSION_NUMBER, VR::SH, "ACC123");
    put_str(&mut dcm, tags::SERIES_NUMBER, VR::IS, "3");
    put_str(&mut dcm, tags::SERIES_DESCRIPTION, VR::LO, "AXIAL");
    put_str(&mut dcm, tags::SERIES_DATE, VR::DA, "20240315");
    put_str(&mut dcm, tags::SERIES_TIME, VR::TM, "101700");
    put_str(&mut dcm, tags::INSTANCE_NUMBER, VR::IS, "42");
    put_str(&mut dcm, tags::MODALITY, VR::CS, "CT");
    put_str(&mut dcm, tags::BODY_PART_EXAMINED, VR::CS, "CHEST");
    put_u16(&mut dcm, tags::ROWS, 512);
    put_u16(&mut dcm, tags::COLUMNS, 256);
    put_u16(&mut dcm, tags::BITS_ALLOCATED, 16);
    put_u16(&mut dcm, tags::BITS_STORED, 12);
    put_str(&mut dcm, tags::SLICE_LOCATION, VR::DS, "-125.5");
    put_str(&mut dcm, tags::SLICE_THICKNESS, VR::DS, "2.5");
    put_strs(&mut dcm, tags::PIXEL_SPACING, VR::DS, &["0.5", "0.25"]);
    put_strs(&mut dcm, tags::IMAGE_POSITION_PATIENT, VR::DS, &["-180", "-200", "-125.5"]);
    put_strs(
        &mut dcm,
        tags::IMAGE_ORIENTATION_PATIENT,
        VR::DS,
        &["1", "0", "0", "0", "1", "0"],
    );
    put_strs(&mut dcm, tags::WINDOW_CENTER, VR::DS, &["40", "400"]);
    put_strs(&mut dcm, tags::WINDOW_WIDTH, VR::DS, &["350", "1500"]);
    put_str(&mut dcm, tags::RESCALE_INTERCEPT, VR::DS, "-1024");
    put_str(&mut dcm, tags::RESCALE_SLOPE, VR::DS, "1");
    put_str(&mut dcm, tags::REFERRING_PHYSICIAN_NAME, VR::PN, "House^Gregory");
    put_str(&mut dcm, tags::PERFORMING_PHYSICIAN_NAME, VR::PN, "Grey^Meredith");
    put_str(&mut dcm, tags::INSTITUTION_NAME, VR::LO, "General Hospital");
    put_str(&mut dcm, tags::INSTITUTIONAL_DEPARTMENT_NAME, VR::LO, "Radiology");
    put_str(&mut dcm, tags::MANUFACTURER, VR::LO, "ACME");
    put_str(&mut dcm, tags::MANUFACTURER_MODEL_NAME, VR::LO, "Scanner 9000");
    put_str(&mut dcm, tags::STATION_NAME, VR::SH, "CT01");
    put_str(&mut dcm, tags::SOFTWARE_VERSIONS, VR::LO, "v1.2");
    dcm
}

/// Writes a standard file: preamble, "DICM", file meta group, data set
pub fn write_standard(dcm: InMemDicomObject, path: &Path, transfer_syntax: &str) {
    let obj = dcm
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(transfer_syntax)
                .media_storage_sop_class_uid(CT_IMAGE_STORAGE)
                .media_storage_sop_instance_uid("1.2.826.0.1.3680043.2.1"),
        )
        .unwrap();
    obj.write_to_file(path).unwrap();
}

/// Writes "DICM", file meta group and data set, without the preamble
pub fn write_without_preamble(dcm: InMemDicomObject, path: &Path) {
    write_standard(dcm, path, EXPLICIT_VR_LE);
    let bytes = fs::read(path).unwrap();
    fs::write(path, &bytes[128..]).unwrap();
}

/// Writes only the data set, with neither preamble nor file meta group
pub fn write_bare_dataset(dcm: InMemDicomObject, path: &Path, transfer_syntax: &str) {
    write_standard(dcm, path, transfer_syntax);
    let bytes = fs::read(path).unwrap();

    // (0002,0000) UL is always the first meta element: tag, VR, 2-byte length, 4-byte value
    let meta_start = 132;
    assert_eq!(&bytes[meta_start..meta_start + 6], &[0x02, 0x00, 0x00, 0x00, b'U', b'L']);
    let group_length = u32::from_le_bytes(
        bytes[meta_start + 8..meta_start + 12].try_into().unwrap(),
    ) as usize;
    let dataset_start = meta_start + 12 + group_length;

    fs::write(path, &bytes[dataset_start..]).unwrap();
}

pub fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
