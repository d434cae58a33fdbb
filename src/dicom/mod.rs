//! DICOM container parsing module
//!
//! This module provides the tag, VR and dataset types plus the reader that
//! turns a Part 10 file into a [`Dataset`].

pub mod constants;
pub mod dataset;
pub mod dictionary;
pub mod element;
pub mod errors;
pub mod reader;
pub mod tag;
pub mod validation;
pub mod vr;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use dataset::Dataset;
pub use element::DataElement;
pub use errors::{DicomError, DicomResult};
pub use reader::DicomReader;
pub use tag::Tag;
pub use vr::Vr;
