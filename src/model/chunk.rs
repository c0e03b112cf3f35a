//! Chunk-level types returned by the parse service.

use serde::{Deserialize, Serialize};

/// One unit of extracted content (paragraph, table, figure, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk identifier assigned by the service
    pub id: String,

    /// Chunk type tag (e.g. "text", "table", "figure"); values are owned by the service
    #[serde(rename = "type")]
    pub chunk_type: String,

    /// Markdown rendering of the chunk content
    #[serde(default)]
    pub markdown: String,

    /// Location of the chunk on the page, when the service provides one
    #[serde(default)]
    pub grounding: Option<Grounding>,
}

impl Chunk {
    /// Create an ungrounded chunk.
    pub fn new(
        id: impl Into<String>,
        chunk_type: impl Into<String>,
        markdown: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            chunk_type: chunk_type.into(),
            markdown: markdown.into(),
            grounding: None,
        }
    }

    /// Attach grounding.
    pub fn with_grounding(mut self, grounding: Grounding) -> Self {
        self.grounding = Some(grounding);
        self
    }

    /// Page number, if grounded.
    pub fn page(&self) -> Option<u32> {
        self.grounding.as_ref().map(|g| g.page)
    }

    /// Bounding box, if grounded.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.grounding.as_ref().map(|g| &g.bbox)
    }
}

/// Positional metadata locating a chunk on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grounding {
    /// Page index as reported by the service
    pub page: u32,

    /// Box enclosing the chunk
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
}

impl Grounding {
    /// Create grounding for a page and box.
    pub fn new(page: u32, bbox: BoundingBox) -> Self {
        Self { page, bbox }
    }
}

/// Four edges delimiting a chunk on its page.
///
/// Field order is the output order: top, bottom, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}
