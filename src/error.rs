use thiserror::Error;

/// Unified error type for RAWG API and I/O operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// API returned an error body (`{"detail": "..."}`)
    #[error("API error {status}: {detail}")]
    ApiResponse {
        status: reqwest::StatusCode,
        detail: String,
    },
    /// HTTP error status code without a readable body
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Image decoding error
    #[error("Image error: {0}")]
    Image(String),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while assembling the client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RAWG API key is missing (set RAWG_API_KEY or pass --api-key)")]
    MissingApiKey,
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Errors raised by the pagination loader itself
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Invalid pagination policy: {0}")]
    InvalidPolicy(&'static str),
}
