//! Decoded greyscale rasters

use byteorder::{BigEndian, ByteOrder};

use crate::dicom::errors::{DicomError, DicomResult};

/// Storage width of one raster sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDepth {
    Eight,
    Sixteen,
}

impl SampleDepth {
    /// Depth used for a given Bits Allocated value
    pub fn for_bits_allocated(bits_allocated: u64) -> Self {
        if bits_allocated > 8 {
            SampleDepth::Sixteen
        } else {
            SampleDepth::Eight
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            SampleDepth::Eight => 8,
            SampleDepth::Sixteen => 16,
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            SampleDepth::Eight => 1,
            SampleDepth::Sixteen => 2,
        }
    }
}

/// A single-channel grid of intensity samples
///
/// Samples are stored row-major without padding. 16-bit samples are stored
/// high byte first, the layout PNG expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    depth: SampleDepth,
    data: Vec<u8>,
}

impl Raster {
    /// Wraps sample bytes, checking they fill exactly width x height samples
    pub fn new(width: u32, height: u32, depth: SampleDepth, data: Vec<u8>) -> DicomResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(depth.bytes()));

        if expected != Some(data.len()) {
            return Err(DicomError::InvalidImageData(format!(
                "{} bytes do not form a {}x{} raster of {}-bit samples",
                data.len(),
                width,
                height,
                depth.bits()
            )));
        }

        Ok(Raster { width, height, depth, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> SampleDepth {
        self.depth
    }

    /// Raw sample bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Sample at column `x`, row `y`
    pub fn sample(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = y as usize * self.width as usize + x as usize;
        match self.depth {
            SampleDepth::Eight => self.data.get(index).map(|&b| b as u16),
            SampleDepth::Sixteen => self
                .data
                .get(index * 2..index * 2 + 2)
                .map(BigEndian::read_u16),
        }
    }

    /// All samples widened to `u16`, row-major
    pub fn samples(&self) -> Vec<u16> {
        match self.depth {
            SampleDepth::Eight => self.data.iter().map(|&b| b as u16).collect(),
            SampleDepth::Sixteen => self.data.chunks_exact(2).map(BigEndian::read_u16).collect(),
        }
    }
}
