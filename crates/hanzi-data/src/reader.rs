//! Dictionary file loading.
//!
//! The dictionary stores one JSON object per line with no enclosing array.
//! Every line is decoded on its own into a [`CharacterRecord`]; a single
//! malformed line fails the whole load.

use std::path::Path;

use hanzi_core::models::CharacterRecord;
use hanzi_core::{Result, StatsError};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Read `path` fully into memory and parse every record in it.
///
/// Fails with [`StatsError::FileRead`] when the file is missing, unreadable
/// or not UTF-8, and with [`StatsError::RecordParse`] on the first bad line.
pub fn load_dictionary(path: &Path) -> Result<Vec<CharacterRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse line-delimited JSON records, preserving line order.
///
/// A trailing newline does not produce an extra record, and a last line
/// without one is still parsed. Blank lines are skipped.
pub fn parse_records(content: &str) -> Result<Vec<CharacterRecord>> {
    let mut records = Vec::new();
    let mut blank_lines = 0usize;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank_lines += 1;
            continue;
        }

        let record = serde_json::from_str(trimmed).map_err(|source| StatsError::RecordParse {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    if blank_lines > 0 {
        debug!("Skipped {} blank lines", blank_lines);
    }

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
