//! Loading bug records from the JSON input file

use crate::BugRecord;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading the input file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist; callers report this and stop cleanly
    #[error("Could not find {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bug data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the bug list at `path`
pub fn load_records(path: &Path) -> Result<Vec<BugRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON array of bug records
pub fn parse_records(content: &str) -> Result<Vec<BugRecord>, serde_json::Error> {
    // Tolerate a UTF-8 byte-order mark from editors on Windows
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    serde_json::from_str(content)
}

/// Ids that appear more than once, with their occurrence count, in first-seen order
pub fn duplicate_ids(records: &[BugRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for record in records {
        let count = counts.entry(record.id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.id.as_str());
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|id| {
            let count = counts[id];
            (count > 1).then(|| (id.to_string(), count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_input() {
        let err = load_records(Path::new("definitely/not/here/bugs.json")).unwrap_err();
        assert!(matches!(err, LoadError::MissingInput { .. }));
        assert!(err.to_string().contains("Could not find"));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "game": "ds3", "severity": "critical", "type": "ai"}},
                {{"id": 2, "title": "Floating rock"}}]"#
        )
        .unwrap();
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bug_type, "ai");
        assert_eq!(records[1].id, "2");
        assert_eq!(records[1].game, "unknown");
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[{{\"id\": \"1\",").unwrap();
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_not_an_array_is_parse_error() {
        assert!(parse_records(r#"{"id": "1"}"#).is_err());
    }

    #[test]
    fn test_byte_order_mark_tolerated() {
        let records = parse_records("\u{feff}[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let records = vec![
            BugRecord::new("1"),
            BugRecord::new("2"),
            BugRecord::new("1"),
            BugRecord::new("3"),
            BugRecord::new("1"),
        ];
        assert_eq!(duplicate_ids(&records), vec![("1".to_string(), 3)]);
        assert!(duplicate_ids(&records[1..4]).is_empty());
    }
}
