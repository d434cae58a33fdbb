//! PNG encoding of decoded rasters
//!
//! 8-bit rasters become `L8` PNGs and 16-bit rasters `L16` PNGs. No
//! windowing or other intensity transformation is applied here.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use log::{debug, info};

use crate::decode::raster::{Raster, SampleDepth};
use crate::dicom::errors::{DicomError, DicomResult};

/// Converts a raster into a greyscale image buffer
pub fn raster_to_image(raster: &Raster) -> DicomResult<DynamicImage> {
    let (width, height) = (raster.width(), raster.height());

    let image = match raster.depth() {
        SampleDepth::Eight => {
            ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(width, height, raster.as_bytes().to_vec())
                .map(DynamicImage::ImageLuma8)
        }
        SampleDepth::Sixteen => {
            ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, raster.samples())
                .map(DynamicImage::ImageLuma16)
        }
    };

    image.ok_or_else(|| {
        DicomError::InvalidImageData(format!("raster does not fill {}x{} pixels", width, height))
    })
}

/// Writes a raster to a PNG file
pub fn write_png(raster: &Raster, path: &Path) -> DicomResult<()> {
    debug!(
        "Encoding {}x{} {}-bit raster to {}",
        raster.width(),
        raster.height(),
        raster.depth().bits(),
        path.display()
    );

    raster_to_image(raster)?.save_with_format(path, ImageFormat::Png)?;

    info!("Saved PNG to {}", path.display());
    Ok(())
}

/// Encodes a raster to PNG bytes in memory
pub fn encode_png(raster: &Raster) -> DicomResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    raster_to_image(raster)?.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}
