//! Semantic decoding of datasets
//!
//! Resolves element values to typed values and greyscale Pixel Data to
//! rasters. Everything here is a pure function of an already-parsed
//! [`Dataset`](crate::dicom::Dataset): no I/O and no logging.

pub mod descriptor;
pub mod pixel;
pub mod raster;
pub mod resolver;
pub mod value;

#[cfg(test)]
mod tests;

pub use descriptor::PixelDescriptor;
pub use pixel::decode;
pub use raster::{Raster, SampleDepth};
pub use resolver::{resolve, resolve_tag};
pub use value::TypedValue;
