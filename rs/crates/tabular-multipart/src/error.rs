use thiserror::Error;

/// Why a request body could not yield an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadParseError {
    #[error("multipart boundary is empty")]
    MissingBoundary,
    #[error("expected multipart/form-data with a boundary parameter")]
    MalformedContentType,
    #[error("no multipart parts found in request body")]
    NoPartsFound,
    #[error("file part missing")]
    FilePartMissing,
    #[error("could not parse request body: multipart part truncated")]
    TruncatedPart,
}
