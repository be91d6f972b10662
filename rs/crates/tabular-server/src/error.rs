use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tabular_multipart::UploadParseError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Forbidden,
    NotFound(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(e) => write!(f, "bad request: {}", e),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound(e) => write!(f, "not found: {}", e),
            Self::Internal(e) => write!(f, "internal: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            Self::BadRequest(e) => (StatusCode::BAD_REQUEST, e.as_str()),
            Self::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            Self::NotFound(e) => (StatusCode::NOT_FOUND, e.as_str()),
            Self::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.as_str()),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<UploadParseError> for AppError {
    fn from(e: UploadParseError) -> Self {
        match e {
            UploadParseError::TruncatedPart => Self::Internal(e.to_string()),
            UploadParseError::MissingBoundary
            | UploadParseError::MalformedContentType
            | UploadParseError::NoPartsFound
            | UploadParseError::FilePartMissing => Self::BadRequest(e.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound("file not found".into()),
            _ => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_status() {
        let cases = [
            (UploadParseError::MissingBoundary, StatusCode::BAD_REQUEST),
            (UploadParseError::MalformedContentType, StatusCode::BAD_REQUEST),
            (UploadParseError::NoPartsFound, StatusCode::BAD_REQUEST),
            (UploadParseError::FilePartMissing, StatusCode::BAD_REQUEST),
            (UploadParseError::TruncatedPart, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status, "{:?}", err);
        }
    }

    #[test]
    fn test_io_not_found() {
        let err = AppError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
