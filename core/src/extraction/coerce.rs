//! Coercion of stored DICOM elements into JSON-safe scalars
//!
//! Every function takes the element as found in the data set plus the
//! attribute keyword used in error messages. A present element that cannot be
//! converted is an error, never silently replaced by a default.

use crate::error::{DcmMetaError, Result};
use dicom_object::mem::InMemElement;

/// Renders an element as text with trailing padding trimmed
///
/// Multi-valued strings are joined with the DICOM backslash separator.
/// Leading spaces are kept. An empty value yields an empty string.
pub fn text(elem: &InMemElement, keyword: &'static str) -> Result<String> {
    let s = elem
        .to_str()
        .map_err(|e| DcmMetaError::invalid_value(keyword, e))?;
    Ok(s.trim_end_matches(|c: char| c.is_whitespace() || c == '\0').to_string())
}

/// Parses a single-valued integer element (IS strings or binary integers)
pub fn integer(elem: &InMemElement, keyword: &'static str) -> Result<i64> {
    non_empty(elem, keyword)?;
    let values = elem
        .to_multi_int::<i64>()
        .map_err(|e| DcmMetaError::invalid_value(keyword, e))?;
    single(values, keyword)
}

/// Parses a single-valued floating point element (DS strings or binary floats)
pub fn float(elem: &InMemElement, keyword: &'static str) -> Result<f64> {
    single(floats(elem, keyword)?, keyword)
}

/// Parses a possibly multi-valued element and keeps its first value
pub fn first_float(elem: &InMemElement, keyword: &'static str) -> Result<f64> {
    floats(elem, keyword)?
        .into_iter()
        .next()
        .ok_or_else(|| DcmMetaError::invalid_value(keyword, "value is empty"))
}

/// Parses every value of an element as a float, preserving order
///
/// Non-finite values are rejected since JSON has no representation for them.
pub fn floats(elem: &InMemElement, keyword: &'static str) -> Result<Vec<f64>> {
    non_empty(elem, keyword)?;
    let values = elem
        .to_multi_float64()
        .map_err(|e| DcmMetaError::invalid_value(keyword, e))?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(DcmMetaError::invalid_value(
            keyword,
            format!("non-finite value {}", bad),
        ));
    }
    Ok(values)
}

fn non_empty(elem: &InMemElement, keyword: &'static str) -> Result<()> {
    if elem.value().multiplicity() == 0 {
        return Err(DcmMetaError::invalid_value(keyword, "value is empty"));
    }
    Ok(())
}

fn single<T>(values: Vec<T>, keyword: &'static str) -> Result<T> {
    let count = values.len();
    let mut values = values.into_iter();
    match (values.next(), count) {
        (Some(v), 1) => Ok(v),
        (None, _) => Err(DcmMetaError::invalid_value(keyword, "value is empty")),
        _ => Err(DcmMetaError::invalid_value(
            keyword,
            format!("expected a single value, found {}", count),
        )),
    }
}
