//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::api::DicomKit;
use crate::dicom::errors::DicomResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> DicomResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade the command operates through
    /// * `logger` - Logger for recording operations
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        kit: &'a DicomKit,
        logger: &'a Logger,
    ) -> DicomResult<Box<dyn Command + 'a>>;
}
