//! DICOM attribute tags

use std::fmt;
use std::str::FromStr;

/// A (group, element) pair identifying one attribute in a dataset
///
/// Rendered as eight upper-case hex digits, e.g. `00280010` for Rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    /// Creates a tag from its group and element numbers
    pub const fn new(group: u16, element: u16) -> Self {
        Tag { group, element }
    }

    /// Group length elements (xxxx,0000) carry the byte length of their group
    pub fn is_group_length(&self) -> bool {
        self.element == 0x0000
    }

    /// Private tags live in odd-numbered groups
    pub fn is_private(&self) -> bool {
        self.group % 2 == 1
    }

    /// Item, item delimitation and sequence delimitation tags (FFFE,xxxx)
    pub fn is_delimiter(&self) -> bool {
        self.group == 0xFFFE
    }
}

/// Error returned when a string is not an 8-hex-digit tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError(pub String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not an 8-digit hexadecimal tag", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Accepts `00280010` as well as the `x00280010` form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('x').or_else(|| s.strip_prefix('X')).unwrap_or(s);

        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseTagError(s.to_string()));
        }

        let group = u16::from_str_radix(&digits[..4], 16).map_err(|_| ParseTagError(s.to_string()))?;
        let element = u16::from_str_radix(&digits[4..], 16).map_err(|_| ParseTagError(s.to_string()))?;

        Ok(Tag { group, element })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}{:04X}", self.group, self.element)
    }
}
