//! Tag value resolution
//!
//! Turns the located bytes of one element into a [`TypedValue`], choosing
//! the decoding from the element's VR. Pure functions of (dataset, tag).

use crate::decode::value::TypedValue;
use crate::dicom::dataset::Dataset;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;

/// Resolves a tag given as 8 hex digits (optionally prefixed with `x`)
///
/// A string that is not a well-formed tag can match no element, so it fails
/// the same way as an absent tag.
pub fn resolve(dataset: &Dataset, tag: &str) -> DicomResult<TypedValue> {
    let parsed: Tag = tag
        .parse()
        .map_err(|_| DicomError::ElementNotFound(tag.to_string()))?;

    resolve_tag(dataset, parsed)
}

/// Resolves an element to the value type its VR declares
///
/// Multi-valued elements resolve to their first value. A zero-length element
/// resolves to [`TypedValue::Empty`]; a non-empty element whose bytes do not
/// decode fails with [`DicomError::MalformedValue`].
pub fn resolve_tag(dataset: &Dataset, tag: Tag) -> DicomResult<TypedValue> {
    let element = dataset
        .element(tag)
        .ok_or_else(|| DicomError::ElementNotFound(tag.to_string()))?;

    if element.is_empty() {
        return Ok(TypedValue::Empty);
    }

    let value = match element.vr {
        Vr::US => dataset.uint16(tag, 0).map(TypedValue::UnsignedShort),
        Vr::SS => dataset.int16(tag, 0).map(TypedValue::SignedShort),
        Vr::UL => dataset.uint32(tag, 0).map(TypedValue::UnsignedLong),
        Vr::SL => dataset.int32(tag, 0).map(TypedValue::SignedLong),
        Vr::FL => dataset.float(tag, 0).map(TypedValue::Float),
        Vr::FD => dataset.double(tag, 0).map(TypedValue::Double),
        Vr::UT | Vr::ST | Vr::LT => dataset.text(tag, None).map(TypedValue::Text),
        Vr::DS => dataset
            .string(tag, Some(0))
            .and_then(|s| s.parse::<f64>().ok())
            // DS has no spelling for NaN or infinity
            .filter(|v| v.is_finite())
            .map(TypedValue::Decimal),
        Vr::IS => dataset
            .string(tag, Some(0))
            .and_then(|s| s.parse::<i64>().ok())
            .map(TypedValue::Integer),
        _ => dataset.string(tag, None).map(TypedValue::Str),
    };

    value.ok_or(DicomError::MalformedValue { tag, vr: element.vr })
}
