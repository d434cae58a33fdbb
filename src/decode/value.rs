//! Typed element values

use std::fmt;

/// An element value decoded according to its VR
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// US
    UnsignedShort(u16),
    /// SS
    SignedShort(i16),
    /// UL
    UnsignedLong(u32),
    /// SL
    SignedLong(i32),
    /// FL
    Float(f32),
    /// FD
    Double(f64),
    /// UT, ST, LT
    Text(String),
    /// DS
    Decimal(f64),
    /// IS
    Integer(i64),
    /// Any other VR, read as a character string
    Str(String),
    /// Element present with a zero-length value
    Empty,
}

impl TypedValue {
    /// Integer value if this is a non-negative integer of any width
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            TypedValue::UnsignedShort(v) => Some(v as u64),
            TypedValue::SignedShort(v) => u64::try_from(v).ok(),
            TypedValue::UnsignedLong(v) => Some(v as u64),
            TypedValue::SignedLong(v) => u64::try_from(v).ok(),
            TypedValue::Integer(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Numeric value of any numeric variant
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            TypedValue::UnsignedShort(v) => Some(v as f64),
            TypedValue::SignedShort(v) => Some(v as f64),
            TypedValue::UnsignedLong(v) => Some(v as f64),
            TypedValue::SignedLong(v) => Some(v as f64),
            TypedValue::Float(v) => Some(v as f64),
            TypedValue::Double(v) | TypedValue::Decimal(v) => Some(v),
            TypedValue::Integer(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) | TypedValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TypedValue::Empty)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::UnsignedShort(v) => write!(f, "{}", v),
            TypedValue::SignedShort(v) => write!(f, "{}", v),
            TypedValue::UnsignedLong(v) => write!(f, "{}", v),
            TypedValue::SignedLong(v) => write!(f, "{}", v),
            TypedValue::Float(v) => write!(f, "{}", v),
            TypedValue::Double(v) | TypedValue::Decimal(v) => write!(f, "{}", v),
            TypedValue::Integer(v) => write!(f, "{}", v),
            TypedValue::Text(s) | TypedValue::Str(s) => f.write_str(s),
            TypedValue::Empty => Ok(()),
        }
    }
}
