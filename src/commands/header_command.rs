//! Header lookup command
//!
//! Prints the typed value of one tag for each given file.

use clap::ArgMatches;
use log::info;

use crate::api::DicomKit;
use crate::commands::command_traits::Command;
use crate::commands::input_ids;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::utils::logger::Logger;

/// Command resolving a single header value
pub struct HeaderCommand<'a> {
    /// Stored file identifiers
    file_ids: Vec<String>,
    /// Tag to resolve, 8 hex digits
    tag: String,
    kit: &'a DicomKit,
    logger: &'a Logger,
}

impl<'a> HeaderCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a DicomKit, logger: &'a Logger) -> DicomResult<Self> {
        let tag = args
            .get_one::<String>("tag")
            .ok_or_else(|| DicomError::GenericError("Missing tag".to_string()))?
            .clone();

        Ok(HeaderCommand {
            file_ids: input_ids(args)?,
            tag,
            kit,
            logger,
        })
    }
}

impl<'a> Command for HeaderCommand<'a> {
    fn execute(&self) -> DicomResult<()> {
        for file_id in &self.file_ids {
            info!("Reading tag {} from {}", self.tag, file_id);
            let value = self.kit.header_value(file_id, &self.tag)?;

            println!("{}: {}", self.tag, value);
            self.logger.log(&format!("{} {}: {}", file_id, self.tag, value))?;
        }

        Ok(())
    }
}
