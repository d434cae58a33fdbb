//! Byte order handling for DICOM datasets
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading element headers
//! and binary values. The byte order of a dataset is chosen by its
//! transfer syntax; the file meta group is always little-endian.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Result};

use crate::dicom::constants::transfer_syntax;

/// Represents the byte order of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Selects the byte order implied by a transfer syntax UID
    ///
    /// Only Explicit VR Big Endian is big-endian; every other syntax,
    /// including the encapsulated ones, encodes its headers little-endian.
    pub fn from_transfer_syntax(uid: &str) -> Self {
        if uid == transfer_syntax::EXPLICIT_VR_BIG_ENDIAN {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian",
            ByteOrder::BigEndian => "Big Endian",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16>;

    fn read_i16(&self, reader: &mut dyn Read) -> Result<i16>;

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;

    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32>;

    fn read_f32(&self, reader: &mut dyn Read) -> Result<f32>;

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64>;

    /// Reads a (group, element) tag pair
    fn read_tag(&self, reader: &mut dyn Read) -> Result<(u16, u16)> {
        let group = self.read_u16(reader)?;
        let element = self.read_u16(reader)?;
        Ok((group, element))
    }
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_i16(&self, reader: &mut dyn Read) -> Result<i16> {
        reader.read_i16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32> {
        reader.read_i32::<LittleEndian>()
    }

    fn read_f32(&self, reader: &mut dyn Read) -> Result<f32> {
        reader.read_f32::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_i16(&self, reader: &mut dyn Read) -> Result<i16> {
        reader.read_i16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_i32(&self, reader: &mut dyn Read) -> Result<i32> {
        reader.read_i32::<BigEndian>()
    }

    fn read_f32(&self, reader: &mut dyn Read) -> Result<f32> {
        reader.read_f32::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn Read) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }
}
