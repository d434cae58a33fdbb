//! Parsed DICOM datasets
//!
//! A [`Dataset`] owns the raw file bytes and a map from tag to
//! [`DataElement`]. Values are decoded lazily by the accessors below, which
//! return `None` whenever an element is absent, empty, or too short for the
//! requested read. They never panic on malformed offsets.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read};

use crate::dicom::element::DataElement;
use crate::dicom::tag::Tag;
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// An immutable tag to element mapping over a backing byte buffer
pub struct Dataset {
    bytes: Vec<u8>,
    elements: BTreeMap<Tag, DataElement>,
    byte_order: ByteOrder,
    handler: Box<dyn ByteOrderHandler>,
    transfer_syntax: String,
}

impl Dataset {
    /// Assembles a dataset from its buffer and located elements
    ///
    /// When two elements share a tag, the later one wins.
    pub fn new(
        bytes: Vec<u8>,
        elements: impl IntoIterator<Item = DataElement>,
        byte_order: ByteOrder,
        transfer_syntax: impl Into<String>,
    ) -> Self {
        let elements = elements.into_iter().map(|e| (e.tag, e)).collect();

        Dataset {
            bytes,
            elements,
            byte_order,
            handler: byte_order.create_handler(),
            transfer_syntax: transfer_syntax.into(),
        }
    }

    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        self.elements.get(&tag)
    }

    pub fn has_element(&self, tag: Tag) -> bool {
        self.elements.contains_key(&tag)
    }

    /// All elements in ascending tag order
    pub fn elements(&self) -> impl Iterator<Item = &DataElement> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn transfer_syntax(&self) -> &str {
        &self.transfer_syntax
    }

    /// The whole backing buffer
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Value bytes of an element, `None` if absent or out of bounds
    pub fn value_bytes(&self, tag: Tag) -> Option<&[u8]> {
        let element = self.elements.get(&tag)?;
        self.bytes.get(element.range())
    }

    pub fn uint16(&self, tag: Tag, index: usize) -> Option<u16> {
        self.read_numeric(tag, index, 2, |h, r| h.read_u16(r))
    }

    pub fn int16(&self, tag: Tag, index: usize) -> Option<i16> {
        self.read_numeric(tag, index, 2, |h, r| h.read_i16(r))
    }

    pub fn uint32(&self, tag: Tag, index: usize) -> Option<u32> {
        self.read_numeric(tag, index, 4, |h, r| h.read_u32(r))
    }

    pub fn int32(&self, tag: Tag, index: usize) -> Option<i32> {
        self.read_numeric(tag, index, 4, |h, r| h.read_i32(r))
    }

    pub fn float(&self, tag: Tag, index: usize) -> Option<f32> {
        self.read_numeric(tag, index, 4, |h, r| h.read_f32(r))
    }

    pub fn double(&self, tag: Tag, index: usize) -> Option<f64> {
        self.read_numeric(tag, index, 8, |h, r| h.read_f64(r))
    }

    /// Character string value, trimmed at both ends
    ///
    /// With `Some(index)` the value is split on backslashes and the given
    /// component is returned.
    pub fn string(&self, tag: Tag, index: Option<usize>) -> Option<String> {
        let raw = self.fixed_string(tag)?;

        match index {
            Some(i) => raw.split('\\').nth(i).map(|s| s.trim().to_string()),
            None => Some(raw.trim().to_string()),
        }
    }

    /// Free text value; only trailing spaces are removed
    pub fn text(&self, tag: Tag, index: Option<usize>) -> Option<String> {
        let raw = self.fixed_string(tag)?;

        match index {
            Some(i) => raw.split('\\').nth(i).map(|s| s.trim_end_matches(' ').to_string()),
            None => Some(raw.trim_end_matches(' ').to_string()),
        }
    }

    /// Number of backslash-separated components in a string value
    pub fn num_string_values(&self, tag: Tag) -> Option<usize> {
        self.fixed_string(tag).map(|s| s.split('\\').count())
    }

    fn read_numeric<T>(
        &self,
        tag: Tag,
        index: usize,
        size: usize,
        read: impl Fn(&dyn ByteOrderHandler, &mut dyn Read) -> io::Result<T>,
    ) -> Option<T> {
        let bytes = self.value_bytes(tag)?;
        let start = index.checked_mul(size)?;
        let mut slice = bytes.get(start..start.checked_add(size)?)?;
        read(self.handler.as_ref(), &mut slice).ok()
    }

    /// Bytes decoded as ISO-8859-1 up to the first NUL
    fn fixed_string(&self, tag: Tag) -> Option<String> {
        let bytes = self.value_bytes(tag)?;
        if bytes.is_empty() {
            return None;
        }

        Some(
            bytes
                .iter()
                .take_while(|&&b| b != 0)
                .map(|&b| b as char)
                .collect(),
        )
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("length", &self.bytes.len())
            .field("elements", &self.elements.len())
            .field("byte_order", &self.byte_order)
            .field("transfer_syntax", &self.transfer_syntax)
            .finish()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DICOM Dataset:")?;
        writeln!(f, "  Transfer syntax: {}", self.transfer_syntax)?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        writeln!(f, "  Number of elements: {}", self.elements.len())?;
        Ok(())
    }
}
