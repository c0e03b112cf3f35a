//! # adepdf
//!
//! Parse PDF documents into grounded content chunks with the LandingAI
//! Agentic Document Extraction (ADE) API, and save them as JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use adepdf::{AdeClient, Config, ConvertOptions};
//!
//! fn main() -> adepdf::Result<()> {
//!     // VISION_AGENT_API_KEY from the environment or ./.env
//!     let config = Config::from_env()?;
//!     let client = AdeClient::new(&config)?;
//!
//!     let options = ConvertOptions::new()
//!         .with_input("dev-example.pdf")
//!         .with_output("parsed_pdf.json");
//!     let result = adepdf::convert(&client, &options)?;
//!     println!("Saved {} chunks", result.chunk_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! The output file is a JSON array with one record per chunk, in the order
//! the service returned them:
//!
//! ```json
//! [
//!   {
//!     "id": "0f3c...",
//!     "type": "text",
//!     "page": 0,
//!     "bounding_box": { "top": 0.1, "bottom": 0.2, "left": 0.05, "right": 0.95 },
//!     "content": "# Heading"
//!   }
//! ]
//! ```
//!
//! Chunks without grounding get `"page": null` and `"bounding_box": null`.

pub mod client;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use client::{AdeClient, DocumentParser, DocumentSource, DEFAULT_MODEL};
pub use config::{Config, Environment};
pub use convert::{convert, ConvertOptions, ConvertResult};
pub use error::{Error, Result};
pub use model::{BoundingBox, Chunk, ChunkRecord, Grounding, ParseResponse, ResponseMetadata};
pub use render::JsonFormat;

use std::path::Path;

/// Parse a local document and return its records, without writing a file.
///
/// Configuration comes from the environment (see [`Config::from_env`]).
///
/// # Example
///
/// ```no_run
/// let records = adepdf::parse_file("dev-example.pdf", adepdf::DEFAULT_MODEL).unwrap();
/// println!("{} chunks", records.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, model: &str) -> Result<Vec<ChunkRecord>> {
    let client = AdeClient::new(&Config::from_env()?)?;
    let response = client.parse(&DocumentSource::from(path.as_ref()), model)?;
    Ok(render::to_records(&response))
}

/// Parse a local document and write its records to `output` as pretty JSON.
///
/// Configuration comes from the environment (see [`Config::from_env`]);
/// `ADE_MODEL` picks the model, falling back to [`DEFAULT_MODEL`].
///
/// # Example
///
/// ```no_run
/// adepdf::convert_file("dev-example.pdf", "parsed_pdf.json").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertResult> {
    let config = Config::from_env()?;
    let client = AdeClient::new(&config)?;
    let mut options = ConvertOptions::new()
        .with_input(input.as_ref())
        .with_output(output.as_ref());
    if let Some(model) = &config.model {
        options = options.with_model(model);
    }
    convert(&client, &options)
}
