use dicom_core::Tag;
use dicom_object::mem::InMemElement;
use dicom_object::InMemDicomObject;

/// Raw result of a defaulted lookup
///
/// Either the element as stored in the data set or the caller's default,
/// untouched. Coercion happens afterwards so both arms go through the same
/// typed path.
#[derive(Debug)]
pub enum RawValue<'a, T> {
    Found(&'a InMemElement),
    Default(T),
}

/// Helper to get an element from a DICOM tag
///
/// Returns `None` if the tag is not present. A present element with an empty
/// value is still returned.
pub fn lookup(dcm: &InMemDicomObject, tag: Tag) -> Option<&InMemElement> {
    dcm.element(tag).ok()
}

/// Helper to check whether a DICOM tag is present, regardless of its value
pub fn is_present(dcm: &InMemDicomObject, tag: Tag) -> bool {
    lookup(dcm, tag).is_some()
}

/// Helper to get an element, falling back to `default` when the tag is absent
pub fn lookup_or<T>(dcm: &InMemDicomObject, tag: Tag, default: T) -> RawValue<'_, T> {
    match lookup(dcm, tag) {
        Some(elem) => RawValue::Found(elem),
        None => RawValue::Default(default),
    }
}
