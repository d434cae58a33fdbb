//! Data element records
//!
//! A data element does not own its value. It records where the value lives in
//! the dataset's backing buffer.

use std::fmt;

use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;

/// One located element of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataElement {
    /// Attribute tag
    pub tag: Tag,
    /// Declared (or, for implicit VR, inferred) value representation
    pub vr: Vr,
    /// Offset of the first value byte in the backing buffer
    pub offset: usize,
    /// Number of value bytes
    pub length: usize,
    /// Whether the element was encoded with undefined length (0xFFFFFFFF)
    pub undefined_length: bool,
}

impl DataElement {
    /// Creates an element with a defined length
    pub fn new(tag: Tag, vr: Vr, offset: usize, length: usize) -> Self {
        DataElement {
            tag,
            vr,
            offset,
            length,
            undefined_length: false,
        }
    }

    /// Byte range of the value within the backing buffer
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for DataElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} offset={} length={}", self.tag, self.vr, self.offset, self.length)?;
        if self.undefined_length {
            write!(f, " (undefined length)")?;
        }
        Ok(())
    }
}
