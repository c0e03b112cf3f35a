//! Error types for adepdf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for adepdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing a document through the API.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input or writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist.
    #[error("Input document not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// No API key was found in the environment or the `.env` file.
    #[error("API key not set: export VISION_AGENT_API_KEY or add it to a .env file")]
    MissingApiKey,

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The parse service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// The response body could not be decoded, or the output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(e) => Error::Io(e),
            _ => Error::Config(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Api {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): Invalid API key");

        let err = Error::InputNotFound(PathBuf::from("missing.pdf"));
        assert_eq!(err.to_string(), "Input document not found: missing.pdf");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_dotenv_parse_error_conversion() {
        let err: Error = dotenvy::Error::LineParse("BAD LINE".to_string(), 3).into();
        assert!(matches!(err, Error::Config(_)));
    }
}
