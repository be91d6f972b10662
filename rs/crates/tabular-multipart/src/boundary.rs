use crate::params::{split_params, unquote};
use crate::UploadParseError;

const FORM_DATA: &str = "multipart/form-data";

/// Derive the body delimiter (`--` + boundary) from a `Content-Type` value.
///
/// `multipart/form-data; boundary=----abc` yields `------abc`. The media type
/// and the parameter name are compared case-insensitively; a quoted boundary
/// is unquoted.
pub fn extract_delimiter(content_type: &str) -> Result<Vec<u8>, UploadParseError> {
    let params = split_params(content_type);
    let mut params = params.into_iter();

    match params.next() {
        Some(media_type) if media_type.eq_ignore_ascii_case(FORM_DATA) => {}
        _ => return Err(UploadParseError::MalformedContentType),
    }

    for param in params {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        if !key.trim().eq_ignore_ascii_case("boundary") {
            continue;
        }
        let boundary = unquote(value.trim());
        if boundary.is_empty() {
            return Err(UploadParseError::MissingBoundary);
        }
        let mut delimiter = Vec::with_capacity(boundary.len() + 2);
        delimiter.extend_from_slice(b"--");
        delimiter.extend_from_slice(boundary.as_bytes());
        return Ok(delimiter);
    }

    Err(UploadParseError::MalformedContentType)
}
