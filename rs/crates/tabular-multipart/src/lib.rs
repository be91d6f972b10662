//! Hand-rolled `multipart/form-data` decoding for single-file uploads.
//!
//! The pipeline is boundary extraction, boundary scanning, then part
//! classification. [`extract_file`] runs all three and returns the first part
//! that declares a filename.

pub mod boundary;
pub mod classify;
mod error;
mod params;
pub mod scan;

pub use boundary::extract_delimiter;
pub use classify::{file_name, is_file_part};
pub use error::UploadParseError;
pub use scan::{scan_parts, Part, PartHeaders};

/// The uploaded file found in a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUploadInfo {
    pub filename: String,
    pub content: Vec<u8>,
}

impl FileUploadInfo {
    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Locate the uploaded file in a buffered multipart body.
///
/// `content_type` is the raw request `Content-Type` value. Later file parts
/// are ignored once one is found. Payload bytes are copied out verbatim.
pub fn extract_file(content_type: &str, body: &[u8]) -> Result<FileUploadInfo, UploadParseError> {
    let delimiter = extract_delimiter(content_type)?;

    let parts = scan_parts(body, &delimiter)?;
    if parts.is_empty() {
        return Err(UploadParseError::NoPartsFound);
    }

    parts
        .iter()
        .find_map(|part| {
            file_name(part).map(|filename| FileUploadInfo {
                filename,
                content: part.payload.to_vec(),
            })
        })
        .ok_or(UploadParseError::FilePartMissing)
}
