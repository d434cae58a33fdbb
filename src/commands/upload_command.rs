//! Upload command
//!
//! Imports one DICOM file into the store and prints its identifier.

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::api::DicomKit;
use crate::commands::command_traits::Command;
use crate::dicom::errors::DicomResult;
use crate::utils::logger::Logger;

/// Command importing a file into the store
pub struct UploadCommand<'a> {
    /// Paths given on the command line; anything but exactly one is rejected
    /// when the command runs
    paths: Vec<PathBuf>,
    kit: &'a DicomKit,
    logger: &'a Logger,
}

impl<'a> UploadCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a DicomKit, logger: &'a Logger) -> DicomResult<Self> {
        let paths = args
            .get_many::<String>("inputs")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        Ok(UploadCommand { paths, kit, logger })
    }
}

impl<'a> Command for UploadCommand<'a> {
    fn execute(&self) -> DicomResult<()> {
        let file_id = self.kit.upload(&self.paths)?;

        info!("Upload successful: {}", file_id);
        println!("{}", file_id);
        self.logger.log(&format!("Uploaded {:?} as {}", self.paths, file_id))?;

        Ok(())
    }
}
