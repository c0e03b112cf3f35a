//! Conversion pipeline: parse a document, map its chunks, write the JSON file.
//!
//! # Example
//!
//! ```no_run
//! use adepdf::convert::{convert, ConvertOptions};
//! use adepdf::{AdeClient, Config};
//!
//! fn main() -> adepdf::Result<()> {
//!     let client = AdeClient::new(&Config::from_env()?)?;
//!     let options = ConvertOptions::new()
//!         .with_input("report.pdf")
//!         .with_output("report.json");
//!     let result = convert(&client, &options)?;
//!     println!("{} chunks", result.chunk_count());
//!     Ok(())
//! }
//! ```

use crate::client::{DocumentParser, DocumentSource, DEFAULT_MODEL};
use crate::error::Result;
use crate::model::{ChunkRecord, ResponseMetadata};
use crate::render::{to_records, write_json, JsonFormat};
use std::path::PathBuf;

/// Input document used when none is given.
pub const DEFAULT_INPUT: &str = "dev-example.pdf";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT: &str = "parsed_pdf.json";

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Document to parse
    pub source: DocumentSource,

    /// Output JSON file, overwritten on every run
    pub output: PathBuf,

    /// Model identifier passed through to the service
    pub model: String,

    /// Output JSON layout
    pub format: JsonFormat,
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document source.
    pub fn with_source(mut self, source: DocumentSource) -> Self {
        self.source = source;
        self
    }

    /// Set a local input file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = DocumentSource::file(path);
        self
    }

    /// Set the output file.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source: DocumentSource::file(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            model: DEFAULT_MODEL.to_string(),
            format: JsonFormat::Pretty,
        }
    }
}

/// Result of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Records as written to the output file
    pub records: Vec<ChunkRecord>,

    /// Path of the written file
    pub output: PathBuf,

    /// Job metadata reported by the service
    pub metadata: Option<ResponseMetadata>,
}

impl ConvertResult {
    /// Number of records written.
    pub fn chunk_count(&self) -> usize {
        self.records.len()
    }

    /// Number of records with page and bounding box.
    pub fn grounded_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_grounded()).count()
    }
}

/// Run one conversion: parse → map → write.
///
/// Any failure aborts the run. The output file is only touched once the
/// parse call has succeeded.
pub fn convert<P>(parser: &P, options: &ConvertOptions) -> Result<ConvertResult>
where
    P: DocumentParser + ?Sized,
{
    log::info!(
        "Parsing {} with {} (model={})",
        options.source,
        parser.name(),
        options.model
    );
    let response = parser.parse(&options.source, &options.model)?;

    let records = to_records(&response);
    write_json(&options.output, &records, options.format)?;

    Ok(ConvertResult {
        records,
        output: options.output.clone(),
        metadata: response.metadata,
    })
}
