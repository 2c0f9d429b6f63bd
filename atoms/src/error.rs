use lambda_http::http::StatusCode;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy shared by every backend and handler.
/// Backend failures are surfaced verbatim - no retries, no masking.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("No photo provided")]
    MissingPayload,

    #[error("Storage backend error: {0}")]
    BackendUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingPayload => StatusCode::BAD_REQUEST,
            ApiError::BackendUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
