use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while computing dictionary statistics.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The dictionary file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary line is not a valid character record.
    #[error("Failed to parse record on line {line}: {source}")]
    RecordParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record has no decomposition and the strict policy is active.
    #[error("Empty decomposition for record {index} (character {character:?})")]
    EmptyDecomposition { index: usize, character: String },
}

/// Convenience alias used throughout the hanzi crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StatsError::FileRead {
            path: PathBuf::from("./dictionary.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("./dictionary.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_record_parse_names_line() {
        let json_err = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err = StatsError::RecordParse {
            line: 7,
            source: json_err,
        };
        assert!(err.to_string().starts_with("Failed to parse record on line 7:"));
    }

    #[test]
    fn test_error_display_empty_decomposition() {
        let err = StatsError::EmptyDecomposition {
            index: 3,
            character: "水".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Empty decomposition for record 3 (character \"水\")"
        );
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StatsError::FileRead {
            path: PathBuf::from("x"),
            source: io_err,
        };
        assert!(err.source().is_some());
    }
}
