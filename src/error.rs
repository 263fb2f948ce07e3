use thiserror::Error;

/// Failure kinds surfaced by the client and its resources.
///
/// `NotFound` and `RateLimited` are specialized remote-call failures;
/// `ApiError` covers every other request problem (transport errors,
/// unexpected statuses, malformed payloads). `ConfigError` is local setup
/// only, e.g. the latest game version could not be resolved.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// True for every failure that originated from a remote call.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiError(_) | AppError::NotFound(_) | AppError::RateLimited
        )
    }
}
