//! Dump command
//!
//! Default command: lists every element of each given file.

use clap::ArgMatches;
use log::info;

use crate::api::DicomKit;
use crate::commands::command_traits::Command;
use crate::commands::input_ids;
use crate::dicom::errors::DicomResult;
use crate::utils::logger::Logger;

/// Command printing an element listing
pub struct DumpCommand<'a> {
    file_ids: Vec<String>,
    kit: &'a DicomKit,
    logger: &'a Logger,
}

impl<'a> DumpCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a DicomKit, logger: &'a Logger) -> DicomResult<Self> {
        Ok(DumpCommand {
            file_ids: input_ids(args)?,
            kit,
            logger,
        })
    }
}

impl<'a> Command for DumpCommand<'a> {
    fn execute(&self) -> DicomResult<()> {
        for file_id in &self.file_ids {
            info!("Dumping {}", file_id);
            let summary = self.kit.describe(file_id)?;

            print!("{}", summary);
            self.logger.log(&summary)?;
        }

        Ok(())
    }
}
