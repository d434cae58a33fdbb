//! DICOM validation utilities
//!
//! Checks applied to uploads before they are accepted into the store.

use log::{debug, warn};

use crate::dicom::constants::tags;
use crate::dicom::dataset::Dataset;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::tag::Tag;

/// Attributes every accepted file must carry with a non-empty value
pub const MANDATORY_TAGS: [Tag; 2] = [tags::PATIENT_NAME, tags::STUDY_DATE];

/// Validates that a dataset looks like a usable DICOM instance
///
/// A file counts as DICOM when all of [`MANDATORY_TAGS`] are present with a
/// non-empty value.
pub fn validate_dicom(dataset: &Dataset) -> DicomResult<()> {
    for tag in MANDATORY_TAGS {
        match dataset.string(tag, None) {
            Some(value) if !value.is_empty() => debug!("Mandatory tag {} present: {}", tag, value),
            _ => {
                warn!("Mandatory tag {} missing or empty", tag);
                return Err(DicomError::InvalidDicom(format!("missing mandatory element {}", tag)));
            }
        }
    }

    Ok(())
}

/// Validates a numeric range to ensure it's within bounds
///
/// # Arguments
/// * `value` - The value to validate
/// * `min` - The minimum valid value (inclusive)
/// * `max` - The maximum valid value (inclusive)
/// * `name` - Name of the value for error messages
pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> DicomResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(DicomError::UnsupportedImageFormat(format!(
            "{} of {} is outside the supported range {} to {}",
            name, value, min, max
        )));
    }

    Ok(())
}
