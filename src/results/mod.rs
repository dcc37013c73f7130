use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One prompt/response pair as it appears in the output file.
///
/// `response` carries either the model's trimmed text or a human-readable
/// failure description starting with "Error:". The output schema has no
/// separate status field, so consumers must check the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub prompt: String,
    pub response: String,
}

impl ResponseRecord {
    pub fn is_error(&self) -> bool {
        self.response.starts_with("Error:")
    }
}

/// Writes `records` to `path` as a JSON array with 4-space indentation,
/// overwriting any existing file. Non-ASCII text is written as-is.
pub fn write_records(records: &[ResponseRecord], path: &Path) -> Result<()> {
    debug!("Writing {} records to {}", records.len(), path.display());

    let file = File::create(path)
        .with_context(|| format!("Could not write to file '{}'", path.display()))?;
    let writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records
        .serialize(&mut serializer)
        .context("Failed to serialize response records")?;

    info!("Saved {} records", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_records() -> Vec<ResponseRecord> {
        vec![
            ResponseRecord {
                prompt: "first prompt".to_string(),
                response: "a response".to_string(),
            },
            ResponseRecord {
                prompt: "second prompt".to_string(),
                response: "Error: HTTP 500".to_string(),
            },
        ]
    }

    #[test]
    fn written_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = sample_records();

        write_records(&records, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<ResponseRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn uses_four_space_indentation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_records(&sample_records(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    {"));
        assert!(content.contains("\n        \"prompt\""));
    }

    #[test]
    fn preserves_non_ascii_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![ResponseRecord {
            prompt: "übersetze: crème brûlée".to_string(),
            response: "日本語のテキスト".to_string(),
        }];

        write_records(&records, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("crème brûlée"));
        assert!(content.contains("日本語のテキスト"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content").unwrap();

        write_records(&sample_records(), &path).unwrap();

        let parsed: Vec<ResponseRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn write_to_missing_directory_is_an_error() {
        let result = write_records(&sample_records(), Path::new("/nonexistent/dir/out.json"));
        assert!(result.is_err());
    }

    #[test]
    fn error_records_are_detected_by_prefix() {
        let records = sample_records();
        assert!(!records[0].is_error());
        assert!(records[1].is_error());
    }
}
