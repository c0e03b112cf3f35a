//! JSON rendering of chunk records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::model::ChunkRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Two-space indented JSON
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert records to a JSON array string.
///
/// Non-ASCII text is emitted as-is, never as `\u` escapes.
pub fn to_json(records: &[ChunkRecord], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records)?,
        JsonFormat::Compact => serde_json::to_string(records)?,
    };
    Ok(json)
}

/// Write records to `path` as a UTF-8 JSON array, replacing any existing file.
pub fn write_json<P: AsRef<Path>>(
    path: P,
    records: &[ChunkRecord],
    format: JsonFormat,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(&mut writer, records)?,
        JsonFormat::Compact => serde_json::to_writer(&mut writer, records)?,
    }
    writer.flush()?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingBox;
    use std::fs;

    fn sample_records() -> Vec<ChunkRecord> {
        vec![
            ChunkRecord {
                id: "a".to_string(),
                chunk_type: "text".to_string(),
                page: Some(1),
                bounding_box: Some(BoundingBox {
                    top: 10.0,
                    bottom: 50.0,
                    left: 5.0,
                    right: 100.0,
                }),
                content: "Überschrift ✅".to_string(),
            },
            ChunkRecord {
                id: "b".to_string(),
                chunk_type: "figure".to_string(),
                page: None,
                bounding_box: None,
                content: String::new(),
            },
        ]
    }

    #[test]
    fn test_to_json_pretty_two_space_indent() {
        let json = to_json(&sample_records(), JsonFormat::Pretty).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": \"a\""));
        assert!(json.contains("\n    \"bounding_box\": {\n      \"top\": 10.0,"));
        assert!(json.contains("\"page\": null"));
    }

    #[test]
    fn test_to_json_unicode_unescaped() {
        let json = to_json(&sample_records(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("Überschrift ✅"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_records(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(to_json(&[], JsonFormat::Pretty).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content that is longer than the new output").unwrap();

        write_json(&path, &[], JsonFormat::Pretty).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = sample_records();

        write_json(&path, &records, JsonFormat::Pretty).unwrap();
        let back: Vec<ChunkRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");
        let result = write_json(&path, &[], JsonFormat::Pretty);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
