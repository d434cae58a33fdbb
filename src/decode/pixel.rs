//! Pixel data decoding
//!
//! Validates the pixel descriptor and unpacks native (uncompressed)
//! greyscale Pixel Data into a [`Raster`]. 12-bit data stored in 16-bit
//! words is widened to the full 16-bit range.

use byteorder::{BigEndian, ByteOrder};

use crate::decode::descriptor::PixelDescriptor;
use crate::decode::raster::{Raster, SampleDepth};
use crate::dicom::constants::{tags, transfer_syntax};
use crate::dicom::dataset::Dataset;
use crate::dicom::errors::{DicomError, DicomResult};

/// Bits Stored value that triggers widening to 16 bits
const WIDENED_BITS_STORED: u64 = 12;
/// Largest 12-bit sample
const MAX_12_BIT: u32 = 4095;
/// Largest 16-bit sample
const MAX_16_BIT: u32 = 65535;

/// Decodes the Pixel Data of a dataset into a raster
///
/// Fails with `InvalidImageData` when Pixel Data or the image dimensions are
/// missing or the pixel bytes are too short, and with
/// `UnsupportedImageFormat` for color, multi-frame, encapsulated or
/// out-of-range bit depth data.
pub fn decode(dataset: &Dataset) -> DicomResult<Raster> {
    let pixel_element = dataset
        .element(tags::PIXEL_DATA)
        .ok_or_else(|| DicomError::InvalidImageData("Pixel Data (7FE00010) is missing".to_string()))?;

    let descriptor = PixelDescriptor::from_dataset(dataset)?;
    descriptor.validate()?;

    if pixel_element.undefined_length || !transfer_syntax::is_native(dataset.transfer_syntax()) {
        return Err(DicomError::UnsupportedImageFormat(format!(
            "compressed pixel data (transfer syntax {})",
            dataset.transfer_syntax()
        )));
    }

    let pixels = dataset
        .value_bytes(tags::PIXEL_DATA)
        .ok_or_else(|| DicomError::InvalidImageData("Pixel Data lies outside the file".to_string()))?;

    let depth = descriptor.sample_depth();
    let needed = descriptor
        .pixel_count()
        .and_then(|n| n.checked_mul(depth.bytes()))
        .ok_or_else(|| DicomError::InvalidImageData("image dimensions overflow".to_string()))?;

    if pixels.len() < needed {
        return Err(DicomError::InvalidImageData(format!(
            "Pixel Data holds {} bytes, {}x{} {}-bit image needs {}",
            pixels.len(),
            descriptor.width,
            descriptor.height,
            depth.bits(),
            needed
        )));
    }

    let data = match depth {
        SampleDepth::Eight => copy_8_bit(&pixels[..needed]),
        SampleDepth::Sixteen => assemble_16_bit(&pixels[..needed], descriptor.bits_stored),
    };

    Raster::new(descriptor.width, descriptor.height, depth, data)
}

/// One byte per pixel, copied as is
fn copy_8_bit(pixels: &[u8]) -> Vec<u8> {
    pixels.to_vec()
}

/// Two bytes per pixel, high byte first, widened when 12 bits are stored
fn assemble_16_bit(pixels: &[u8], bits_stored: u64) -> Vec<u8> {
    let widen = bits_stored == WIDENED_BITS_STORED;
    let mut data = vec![0u8; pixels.len()];

    for (input, output) in pixels.chunks_exact(2).zip(data.chunks_exact_mut(2)) {
        let raw = BigEndian::read_u16(input);
        let value = if widen { widen_12_bit(raw) } else { raw };
        BigEndian::write_u16(output, value);
    }

    data
}

/// Rescales a 12-bit sample to the 16-bit range: `floor(v * 65535 / 4095)`,
/// masked to 16 bits
pub fn widen_12_bit(raw: u16) -> u16 {
    ((raw as u32 * MAX_16_BIT / MAX_12_BIT) & 0xFFFF) as u16
}
