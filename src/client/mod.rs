//! Parse service clients.
//!
//! [`DocumentParser`] is the seam between the conversion pipeline and the
//! remote service. [`AdeClient`] is the HTTP implementation; tests plug in
//! their own.
//!
//! # Example
//!
//! ```no_run
//! use adepdf::client::{AdeClient, DocumentParser, DocumentSource, DEFAULT_MODEL};
//! use adepdf::Config;
//!
//! fn main() -> adepdf::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = AdeClient::new(&config)?;
//!     let response = client.parse(&DocumentSource::file("dev-example.pdf"), DEFAULT_MODEL)?;
//!     println!("{} chunks", response.chunk_count());
//!     Ok(())
//! }
//! ```

mod ade;

pub use ade::{AdeClient, DEFAULT_MODEL, PARSE_PATH};

use crate::error::Result;
use crate::model::ParseResponse;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the document to parse comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local file, uploaded with the request
    File(PathBuf),
    /// Remote URL, fetched by the service
    Url(String),
}

impl DocumentSource {
    /// Local file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        DocumentSource::File(path.into())
    }

    /// Remote URL source.
    pub fn url(url: impl Into<String>) -> Self {
        DocumentSource::Url(url.into())
    }

    /// Interpret a CLI-style input: `http(s)://` strings are URLs, anything else a path.
    pub fn from_input(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::url(input)
        } else {
            Self::file(input)
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::File(path)
    }
}

impl From<&Path> for DocumentSource {
    fn from(path: &Path) -> Self {
        DocumentSource::File(path.to_path_buf())
    }
}

/// Trait for services that decompose a document into chunks.
pub trait DocumentParser {
    /// Name of this parser, for logs.
    fn name(&self) -> &str;

    /// Parse one document with the given model identifier.
    ///
    /// One call, no retries; every failure is returned to the caller.
    fn parse(&self, source: &DocumentSource, model: &str) -> Result<ParseResponse>;
}
