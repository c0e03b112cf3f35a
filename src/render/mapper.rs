//! Mapping from service chunks to output records.

use crate::model::{Chunk, ChunkRecord, ParseResponse};

/// Map one chunk to its output record.
pub fn to_record(chunk: &Chunk) -> ChunkRecord {
    let (page, bounding_box) = match &chunk.grounding {
        Some(grounding) => (Some(grounding.page), Some(grounding.bbox)),
        None => (None, None),
    };

    ChunkRecord {
        id: chunk.id.clone(),
        chunk_type: chunk.chunk_type.clone(),
        page,
        bounding_box,
        content: chunk.markdown.trim().to_string(),
    }
}

/// Map every chunk of a response, preserving order.
pub fn to_records(response: &ParseResponse) -> Vec<ChunkRecord> {
    response.chunks.iter().map(to_record).collect()
}
