//! File store for uploaded DICOM files
//!
//! Files live flat in the data directory, named by a UUID assigned at
//! upload. Exported PNGs go to the export directory as `<id>.png`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::dicom::errors::{DicomError, DicomResult};
use crate::dicom::reader::DicomReader;
use crate::dicom::validation;

/// Directory-backed store of DICOM files
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
    export_dir: PathBuf,
    max_file_size: u64,
}

impl FileStore {
    pub fn new(config: &AppConfig) -> Self {
        FileStore {
            data_dir: config.data_dir.clone(),
            export_dir: config.export_dir.clone(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Creates the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> DicomResult<()> {
        if self.data_dir.is_dir() {
            return Ok(());
        }

        info!("Data directory {} does not exist, creating it", self.data_dir.display());
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            error!("Error initializing data directory: {}", e);
            DicomError::IoError(e)
        })
    }

    /// Creates the export directory if it does not exist yet
    pub fn ensure_export_dir(&self) -> DicomResult<()> {
        fs::create_dir_all(&self.export_dir).map_err(|e| {
            error!("Error creating export directory {}: {}", self.export_dir.display(), e);
            DicomError::ExportDirectoryMissing(format!("{}: {}", self.export_dir.display(), e))
        })
    }

    /// Path of a stored file
    ///
    /// Identifiers containing path separators or parent references are
    /// rejected so lookups cannot leave the data directory.
    pub fn file_path(&self, file_id: &str) -> DicomResult<PathBuf> {
        if file_id.is_empty() || file_id.contains(['/', '\\']) || file_id == "." || file_id == ".." {
            return Err(DicomError::FileNotFound(file_id.to_string()));
        }

        Ok(self.data_dir.join(file_id))
    }

    /// Path the PNG export of a file is written to
    pub fn export_path(&self, file_id: &str) -> PathBuf {
        self.export_dir.join(format!("{}.png", file_id))
    }

    /// Reads the bytes of a stored file
    pub fn read(&self, file_id: &str) -> DicomResult<Vec<u8>> {
        let path = self.file_path(file_id)?;
        debug!("Reading file data from {}", path.display());

        fs::read(&path).map_err(|e| {
            error!("Error reading file data: {}", e);
            DicomError::FileNotFound(file_id.to_string())
        })
    }

    /// Validates and imports a single DICOM file, returning its new identifier
    ///
    /// Exactly one path must be supplied. The file must fit the size limit,
    /// parse, and carry the mandatory patient and study attributes.
    pub fn upload(&self, paths: &[PathBuf]) -> DicomResult<String> {
        let source = match paths {
            [] => return Err(DicomError::FileNotFound("no file supplied".to_string())),
            [single] => single,
            _ => return Err(DicomError::MultiFileUnsupported(paths.len())),
        };

        let size = fs::metadata(source)
            .map_err(|_| DicomError::FileNotFound(source.display().to_string()))?
            .len();
        if size > self.max_file_size {
            return Err(DicomError::FileTooLarge { size, limit: self.max_file_size });
        }

        let bytes = fs::read(source).map_err(|_| DicomError::FileNotFound(source.display().to_string()))?;

        let dataset = DicomReader::new().parse(bytes).map_err(|e| {
            warn!("Invalid dicom file format: {}", e);
            DicomError::InvalidDicom(e.to_string())
        })?;
        validation::validate_dicom(&dataset)?;

        self.ensure_data_dir()?;
        let file_id = Uuid::new_v4().to_string();
        let target = self.data_dir.join(&file_id);
        fs::write(&target, dataset.bytes())?;

        info!("Stored {} as {}", source.display(), file_id);
        Ok(file_id)
    }
}
