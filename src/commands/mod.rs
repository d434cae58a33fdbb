//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod dump_command;
pub mod header_command;
pub mod image_command;
pub mod upload_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;
pub use header_command::HeaderCommand;
pub use image_command::ImageCommand;
pub use upload_command::UploadCommand;

use clap::ArgMatches;
use crate::api::DicomKit;
use crate::dicom::errors::DicomResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct DicomkitCommandFactory;

impl DicomkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        DicomkitCommandFactory
    }
}

impl Default for DicomkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for DicomkitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        kit: &'a DicomKit,
        logger: &'a Logger,
    ) -> DicomResult<Box<dyn Command + 'a>> {
        if args.get_flag("upload") {
            Ok(Box::new(UploadCommand::new(args, kit, logger)?))
        } else if args.contains_id("tag") {
            Ok(Box::new(HeaderCommand::new(args, kit, logger)?))
        } else if args.get_flag("image") {
            Ok(Box::new(ImageCommand::new(args, kit, logger)?))
        } else {
            Ok(Box::new(DumpCommand::new(args, kit, logger)?))
        }
    }
}

/// File identifiers given on the command line
pub(crate) fn input_ids(args: &ArgMatches) -> DicomResult<Vec<String>> {
    let ids: Vec<String> = args
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if ids.is_empty() {
        return Err(crate::dicom::DicomError::FileNotFound("no file id given".to_string()));
    }

    Ok(ids)
}
