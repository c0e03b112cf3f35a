//! Data model for parse responses and output records.
//!
//! `ParseResponse`, `Chunk`, `Grounding` and `BoundingBox` mirror the
//! service's response shape. `ChunkRecord` is the flattened form written to
//! the output file.

mod chunk;
mod record;
mod response;

pub use chunk::{BoundingBox, Chunk, Grounding};
pub use record::ChunkRecord;
pub use response::{ParseResponse, ResponseMetadata};
