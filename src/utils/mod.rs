//! Utility modules for common functionality
//!
//! Logging and progress reporting used by the command-line surface.

pub mod logger;
pub mod progress;
