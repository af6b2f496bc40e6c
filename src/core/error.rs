use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum SecError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from EDGAR was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The requested filing or document does not exist for this filer.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid screening configuration or call sequence.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Writing the CSV report failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error while emitting a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
