use std::path::PathBuf;
use log::{debug, info};
use crate::config::AppConfig;
use crate::decode::{self, TypedValue};
use crate::dicom::dictionary;
use crate::dicom::errors::DicomResult;
use crate::dicom::{Dataset, DicomReader, Vr};
use crate::export;
use crate::storage::FileStore;

/// Main interface to the dicomkit library
///
/// Wires the file store, the reader and the decoders together the way the
/// command-line surface uses them.
pub struct DicomKit {
    config: AppConfig,
    store: FileStore,
    reader: DicomReader,
}

impl DicomKit {
    /// Create a new DicomKit instance
    pub fn new(config: AppConfig) -> Self {
        let store = FileStore::new(&config);
        DicomKit {
            config,
            store,
            reader: DicomReader::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Reads and parses a stored file
    pub fn open(&self, file_id: &str) -> DicomResult<Dataset> {
        let bytes = self.store.read(file_id)?;
        let dataset = self.reader.parse(bytes)?;
        debug!("Opened {}: {} elements", file_id, dataset.len());
        Ok(dataset)
    }

    /// Resolve one header value of a stored file
    ///
    /// # Arguments
    /// * `file_id` - Identifier returned by [`DicomKit::upload`]
    /// * `tag` - Tag as 8 hex digits, e.g. `00280010`
    pub fn header_value(&self, file_id: &str, tag: &str) -> DicomResult<TypedValue> {
        let dataset = self.open(file_id)?;
        let value = decode::resolve(&dataset, tag)?;
        info!("Resolved {} of {}: {:?}", tag, file_id, value);
        Ok(value)
    }

    /// Convert the pixel data of a stored file to PNG
    ///
    /// # Returns
    /// Path of the written PNG file
    pub fn export_png(&self, file_id: &str) -> DicomResult<PathBuf> {
        let dataset = self.open(file_id)?;
        let raster = decode::decode(&dataset)?;
        info!(
            "Decoded {}: {}x{} {}-bit raster",
            file_id,
            raster.width(),
            raster.height(),
            raster.depth().bits()
        );

        self.store.ensure_export_dir()?;
        let output = self.store.export_path(file_id);
        export::write_png(&raster, &output)?;

        Ok(output)
    }

    /// Import one DICOM file into the store
    ///
    /// # Returns
    /// The identifier of the stored file
    pub fn upload(&self, paths: &[PathBuf]) -> DicomResult<String> {
        self.store.upload(paths)
    }

    /// Summarize every element of a stored file, one line per element
    pub fn describe(&self, file_id: &str) -> DicomResult<String> {
        let dataset = self.open(file_id)?;

        let mut result = format!("DICOM file {}\n", file_id);
        result.push_str(&format!("  Transfer syntax: {}\n", dataset.transfer_syntax()));
        result.push_str(&format!("  Number of elements: {}\n", dataset.len()));

        for element in dataset.elements() {
            let value = match element.vr {
                Vr::OB | Vr::OD | Vr::OF | Vr::OL | Vr::OV | Vr::OW | Vr::SQ | Vr::UN => {
                    format!("<{} bytes>", element.length)
                }
                _ => decode::resolve_tag(&dataset, element.tag)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|e| format!("<{}>", e.code())),
            };

            result.push_str(&format!(
                "  {} {:<32} {} {}\n",
                element.tag,
                dictionary::keyword(element.tag),
                element.vr,
                value
            ));
        }

        Ok(result)
    }
}
