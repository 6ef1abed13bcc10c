use thiserror::Error;

/// Errors that can occur while fetching from the meal catalog
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint URL could not be built from the configured base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, TLS, connection, timeout)
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with something other than 200
    #[error("Invalid response status: {0}")]
    BadStatus(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The detail endpoint returned no meal for the requested id
    #[error("No meal details found")]
    NotFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Async runtime could not be created (FFI entry points)
    #[error("Runtime error: {0}")]
    Runtime(String),
}
