//! Custom error types for DICOM processing

use std::fmt;
use std::io;

use crate::dicom::tag::Tag;
use crate::dicom::vr::Vr;

/// DICOM-specific error types
///
/// The first group of variants is raised by the decoding core, the second by
/// the collaborators around it (reader, file store, PNG export). Callers map
/// variants to responses through [`DicomError::code`] and
/// [`DicomError::is_client_error`] instead of matching on message text.
#[derive(Debug)]
pub enum DicomError {
    /// Requested tag is not present in the dataset
    ElementNotFound(String),
    /// Element is present but its bytes do not decode as its VR
    MalformedValue { tag: Tag, vr: Vr },
    /// Pixel data or a dimensional field is missing or unreadable
    InvalidImageData(String),
    /// Pixel descriptor is outside the supported envelope
    UnsupportedImageFormat(String),
    /// No file stored under the given identifier
    FileNotFound(String),
    /// The container could not be parsed
    FileParsingFailed(String),
    /// Upload rejected because the file is not a usable DICOM file
    InvalidDicom(String),
    /// More than one file supplied to an upload
    MultiFileUnsupported(usize),
    /// Upload exceeds the configured size limit
    FileTooLarge { size: u64, limit: u64 },
    /// Export directory could not be created
    ExportDirectoryMissing(String),
    /// PNG encoding error
    ImageError(image::ImageError),
    /// I/O error
    IoError(io::Error),
    /// Configuration file problem
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl DicomError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            DicomError::ElementNotFound(_) => "ERR_ELEMENT_NOT_FOUND",
            DicomError::MalformedValue { .. } => "ERR_MALFORMED_VALUE",
            DicomError::InvalidImageData(_) => "ERR_INVALID_IMAGE_DATA",
            DicomError::UnsupportedImageFormat(_) => "ERR_UNSUPPORTED_IMAGE_FORMAT",
            DicomError::FileNotFound(_) => "ERR_FILE_NOT_FOUND",
            DicomError::FileParsingFailed(_) => "ERR_FILE_PARSING_FAILED",
            DicomError::InvalidDicom(_) => "ERR_INVALID_DICOM",
            DicomError::MultiFileUnsupported(_) => "ERR_MULTI_FILE_UNSUPPORTED",
            DicomError::FileTooLarge { .. } => "ERR_FILE_TOO_LARGE",
            DicomError::ExportDirectoryMissing(_) => "ERR_EXPORT_DIRECTORY_MISSING",
            DicomError::ImageError(_)
            | DicomError::IoError(_)
            | DicomError::ConfigError(_)
            | DicomError::GenericError(_) => "ERR_INTERNAL",
        }
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// service itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DicomError::ElementNotFound(_)
                | DicomError::FileNotFound(_)
                | DicomError::InvalidDicom(_)
                | DicomError::MultiFileUnsupported(_)
                | DicomError::FileTooLarge { .. }
        )
    }
}

impl fmt::Display for DicomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DicomError::ElementNotFound(tag) => write!(f, "DICOM element not found with tag {}", tag),
            DicomError::MalformedValue { tag, vr } => write!(f, "Element {} does not hold a valid {} value", tag, vr),
            DicomError::InvalidImageData(msg) => write!(f, "Invalid image data: {}", msg),
            DicomError::UnsupportedImageFormat(msg) => write!(f, "Unsupported image format: {}", msg),
            DicomError::FileNotFound(id) => write!(f, "File not found: {}", id),
            DicomError::FileParsingFailed(msg) => write!(f, "Error parsing dicom file: {}", msg),
            DicomError::InvalidDicom(msg) => write!(f, "Invalid dicom file: {}", msg),
            DicomError::MultiFileUnsupported(n) => write!(f, "Only one file can be uploaded at a time ({} given)", n),
            DicomError::FileTooLarge { size, limit } => write!(f, "File of {} bytes exceeds the {} byte limit", size, limit),
            DicomError::ExportDirectoryMissing(msg) => write!(f, "Export directory unavailable: {}", msg),
            DicomError::ImageError(e) => write!(f, "Image encoding error: {}", e),
            DicomError::IoError(e) => write!(f, "I/O error: {}", e),
            DicomError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DicomError::GenericError(msg) => write!(f, "DICOM error: {}", msg),
        }
    }
}

impl std::error::Error for DicomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DicomError::ImageError(e) => Some(e),
            DicomError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DicomError {
    fn from(error: io::Error) -> Self {
        DicomError::IoError(error)
    }
}

impl From<image::ImageError> for DicomError {
    fn from(error: image::ImageError) -> Self {
        DicomError::ImageError(error)
    }
}

/// Result type for DICOM operations
pub type DicomResult<T> = Result<T, DicomError>;

impl From<String> for DicomError {
    fn from(msg: String) -> Self {
        DicomError::GenericError(msg)
    }
}
