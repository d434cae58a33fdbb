//! Image container export
//!
//! Serializes decoded rasters into distributable image files.

pub mod png;

pub use png::{encode_png, raster_to_image, write_png};
