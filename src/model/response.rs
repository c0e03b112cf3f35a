//! Response-level types.

use super::Chunk;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured response of one parse call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Chunks in document reading order
    pub chunks: Vec<Chunk>,

    /// Markdown of the whole document
    #[serde(default)]
    pub markdown: Option<String>,

    /// Job metadata
    #[serde(default)]
    pub metadata: Option<ResponseMetadata>,
}

impl ParseResponse {
    /// Create a response from chunks.
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks,
            markdown: None,
            metadata: None,
        }
    }

    /// Number of chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the response carries no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of chunks without grounding.
    pub fn ungrounded_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.grounding.is_none()).count()
    }
}

/// Job metadata reported by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub page_count: Option<u32>,

    /// Server-side processing time in milliseconds
    #[serde(default)]
    pub duration_ms: Option<u64>,

    #[serde(default)]
    pub credit_usage: Option<f64>,

    #[serde(default)]
    pub job_id: Option<String>,

    /// Model version that served the request
    #[serde(default)]
    pub version: Option<String>,
}

impl fmt::Display for ResponseMetadata {
    /// Space-separated `key=value` pairs for the fields the service reported.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(job_id) = &self.job_id {
            parts.push(format!("job_id={}", job_id));
        }
        if let Some(version) = &self.version {
            parts.push(format!("version={}", version));
        }
        if let Some(filename) = &self.filename {
            parts.push(format!("filename={}", filename));
        }
        if let Some(pages) = self.page_count {
            parts.push(format!("pages={}", pages));
        }
        if let Some(ms) = self.duration_ms {
            parts.push(format!("duration_ms={}", ms));
        }
        if let Some(credits) = self.credit_usage {
            parts.push(format!("credits={}", credits));
        }

        if parts.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r##"{
            "markdown": "# Title\n\nBody",
            "chunks": [
                {"id": "a", "type": "text", "markdown": "# Title",
                 "grounding": {"page": 0, "box": {"left": 0, "top": 0, "right": 1, "bottom": 0.1}}},
                {"id": "b", "type": "text", "markdown": "Body"}
            ],
            "splits": [],
            "metadata": {"filename": "dev-example.pdf", "page_count": 1, "duration_ms": 1234,
                         "credit_usage": 3.0, "job_id": "j-1", "version": "dpt-2-20250919"}
        }"##;
        let response: ParseResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.chunk_count(), 2);
        assert_eq!(response.ungrounded_count(), 1);
        assert_eq!(response.chunks[0].id, "a");
        assert_eq!(response.chunks[1].id, "b");

        let metadata = response.metadata.unwrap();
        assert_eq!(metadata.page_count, Some(1));
        assert_eq!(metadata.version.as_deref(), Some("dpt-2-20250919"));
    }

    #[test]
    fn test_deserialize_minimal_response() {
        let response: ParseResponse = serde_json::from_str(r#"{"chunks": []}"#).unwrap();
        assert!(response.is_empty());
        assert!(response.metadata.is_none());
        assert!(response.markdown.is_none());
    }

    #[test]
    fn test_metadata_display() {
        let metadata = ResponseMetadata {
            filename: Some("dev-example.pdf".to_string()),
            page_count: Some(2),
            job_id: Some("j-1".to_string()),
            version: Some("dpt-2-20250919".to_string()),
            ..Default::default()
        };
        assert_eq!(
            metadata.to_string(),
            "job_id=j-1 version=dpt-2-20250919 filename=dev-example.pdf pages=2"
        );
        assert_eq!(ResponseMetadata::default().to_string(), "(none)");
    }

    #[test]
    fn test_missing_chunks_is_rejected() {
        assert!(serde_json::from_str::<ParseResponse>(r#"{"markdown": ""}"#).is_err());
    }
}
