//! Image export command
//!
//! Converts the pixel data of each given file to a PNG in the export
//! directory. A failing file does not stop the batch; the command fails
//! afterwards with the first error encountered.

use clap::ArgMatches;
use log::{error, info};

use crate::api::DicomKit;
use crate::commands::command_traits::Command;
use crate::commands::input_ids;
use crate::dicom::errors::DicomResult;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command exporting pixel data as PNG
pub struct ImageCommand<'a> {
    file_ids: Vec<String>,
    kit: &'a DicomKit,
    logger: &'a Logger,
}

impl<'a> ImageCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a DicomKit, logger: &'a Logger) -> DicomResult<Self> {
        Ok(ImageCommand {
            file_ids: input_ids(args)?,
            kit,
            logger,
        })
    }
}

impl<'a> Command for ImageCommand<'a> {
    fn execute(&self) -> DicomResult<()> {
        let progress = if self.file_ids.len() > 1 {
            ProgressTracker::new(self.file_ids.len() as u64, "Exporting PNG files")
        } else {
            ProgressTracker::hidden()
        };

        let mut first_error = None;
        let mut failures = 0;

        for file_id in &self.file_ids {
            progress.set_message(file_id);

            match self.kit.export_png(file_id) {
                Ok(path) => {
                    progress.println(&path.display().to_string());
                    self.logger.log(&format!("Exported {} to {}", file_id, path.display()))?;
                }
                Err(e) => {
                    error!("Export of {} failed: {}", file_id, e);
                    failures += 1;
                    first_error.get_or_insert(e);
                }
            }

            progress.increment(1);
        }

        progress.finish(failures);
        info!("Exported {} of {} files", self.file_ids.len() - failures, self.file_ids.len());

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
