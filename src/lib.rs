pub mod io;
pub mod dicom;
pub mod decode;
pub mod export;
pub mod utils;
pub mod config;
pub mod storage;
pub mod commands;
pub mod api;

pub use crate::api::DicomKit;

pub use dicom::{Dataset, DicomError, DicomReader, DicomResult, Tag};
pub use decode::{decode, resolve, Raster, TypedValue};
