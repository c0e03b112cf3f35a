//! Output record written to the JSON file.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// Flattened view of one chunk, as written to the output file.
///
/// `page` and `bounding_box` are both `null` for ungrounded chunks; the keys
/// are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: String,

    #[serde(rename = "type")]
    pub chunk_type: String,

    pub page: Option<u32>,

    pub bounding_box: Option<BoundingBox>,

    /// Chunk markdown with surrounding whitespace removed
    pub content: String,
}

impl ChunkRecord {
    /// Check if the record carries positional data.
    pub fn is_grounded(&self) -> bool {
        self.page.is_some() && self.bounding_box.is_some()
    }
}
