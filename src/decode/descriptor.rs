//! Pixel data descriptor
//!
//! The image pixel attributes needed to interpret Pixel Data, each resolved
//! individually through the tag resolver.

use crate::decode::raster::SampleDepth;
use crate::decode::resolver;
use crate::dicom::constants::tags;
use crate::dicom::dataset::Dataset;
use crate::dicom::dictionary;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::tag::Tag;
use crate::dicom::validation;

/// Smallest supported Bits Allocated
pub const MIN_BITS_ALLOCATED: u64 = 8;
/// Largest supported Bits Allocated
pub const MAX_BITS_ALLOCATED: u64 = 16;

/// Dimensions and sample layout of the pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDescriptor {
    /// Columns (0028,0011)
    pub width: u32,
    /// Rows (0028,0010)
    pub height: u32,
    /// Samples per Pixel (0028,0002), 1 when absent
    pub samples_per_pixel: u64,
    /// Number of Frames (0028,0008), 1 when absent
    pub number_of_frames: u64,
    /// Bits Allocated (0028,0100)
    pub bits_allocated: u64,
    /// Bits Stored (0028,0101), Bits Allocated when absent
    pub bits_stored: u64,
}

impl PixelDescriptor {
    /// Resolves the descriptor fields from a dataset
    ///
    /// Fails with `InvalidImageData` when Columns, Rows or Bits Allocated are
    /// missing, empty, zero-sized or not integers.
    pub fn from_dataset(dataset: &Dataset) -> DicomResult<Self> {
        let width = require_dimension(dataset, tags::COLUMNS)?;
        let height = require_dimension(dataset, tags::ROWS)?;
        let bits_allocated = lookup_integer(dataset, tags::BITS_ALLOCATED)?
            .ok_or_else(|| missing(tags::BITS_ALLOCATED))?;

        Ok(PixelDescriptor {
            width,
            height,
            samples_per_pixel: lookup_integer(dataset, tags::SAMPLES_PER_PIXEL)?.unwrap_or(1),
            number_of_frames: lookup_integer(dataset, tags::NUMBER_OF_FRAMES)?.unwrap_or(1),
            bits_allocated,
            bits_stored: lookup_integer(dataset, tags::BITS_STORED)?.unwrap_or(bits_allocated),
        })
    }

    /// Checks the descriptor is inside the supported envelope: one greyscale
    /// sample per pixel, a single frame, 8 to 16 bits allocated
    pub fn validate(&self) -> DicomResult<()> {
        if self.samples_per_pixel > 1 {
            return Err(DicomError::UnsupportedImageFormat(format!(
                "{} samples per pixel (only greyscale is supported)",
                self.samples_per_pixel
            )));
        }

        if self.number_of_frames > 1 {
            return Err(DicomError::UnsupportedImageFormat(format!(
                "{} frames (only single-frame images are supported)",
                self.number_of_frames
            )));
        }

        validation::validate_range(self.bits_allocated, MIN_BITS_ALLOCATED, MAX_BITS_ALLOCATED, "bits allocated")
    }

    pub fn sample_depth(&self) -> SampleDepth {
        SampleDepth::for_bits_allocated(self.bits_allocated)
    }

    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

fn missing(tag: Tag) -> DicomError {
    DicomError::InvalidImageData(format!("{} ({}) is missing", dictionary::keyword(tag), tag))
}

fn unreadable(tag: Tag) -> DicomError {
    DicomError::InvalidImageData(format!(
        "{} ({}) is not a non-negative integer",
        dictionary::keyword(tag),
        tag
    ))
}

/// Integer value of an optional attribute; absent and empty both give `None`
fn lookup_integer(dataset: &Dataset, tag: Tag) -> DicomResult<Option<u64>> {
    match resolver::resolve_tag(dataset, tag) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => value.as_u64().map(Some).ok_or_else(|| unreadable(tag)),
        Err(DicomError::ElementNotFound(_)) => Ok(None),
        Err(DicomError::MalformedValue { .. }) => Err(unreadable(tag)),
        Err(e) => Err(e),
    }
}

fn require_dimension(dataset: &Dataset, tag: Tag) -> DicomResult<u32> {
    let value = lookup_integer(dataset, tag)?.ok_or_else(|| missing(tag))?;

    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(DicomError::InvalidImageData(format!(
            "{} ({}) of {} is not a usable image dimension",
            dictionary::keyword(tag),
            tag,
            value
        ))),
    }
}
