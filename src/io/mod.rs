//! I/O utilities
//!
//! This module provides the byte order strategies used to read binary values.

pub mod byte_order;
