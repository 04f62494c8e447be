//! Frequency tables over dictionary records.
//!
//! Each aggregator makes one pass over the records and counts one category
//! per qualifying record: the radical, the decomposition layout character,
//! or the etymology type.

use std::collections::HashMap;

use hanzi_core::models::{CharacterRecord, EmptyDecompositionPolicy};
use hanzi_core::{Result, StatsError};
use tracing::{debug, warn};

// ── FrequencyTable ────────────────────────────────────────────────────────────

/// Occurrence count per category key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_owned(), 1);
        }
    }

    /// Count for `key`, zero when never seen.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries ordered by count descending, then key ascending.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

// ── DecompositionCounts ───────────────────────────────────────────────────────

/// Decomposition table plus the number of records left out of it.
#[derive(Debug, Clone, Default)]
pub struct DecompositionCounts {
    pub table: FrequencyTable,
    /// Records with an empty decomposition under [`EmptyDecompositionPolicy::Skip`].
    pub skipped: usize,
}

// ── FrequencyAggregator ───────────────────────────────────────────────────────

/// Stateless helper that builds the three frequency tables.
pub struct FrequencyAggregator;

impl FrequencyAggregator {
    /// Count records per radical. The empty radical is its own key.
    pub fn radicals(records: &[CharacterRecord]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for record in records {
            table.increment(&record.radical);
        }
        debug!("Radical table: {} keys", table.len());
        table
    }

    /// Count records per first codepoint of the decomposition.
    ///
    /// Records with an empty decomposition are skipped or fail the whole
    /// aggregation, depending on `policy`.
    pub fn decompositions(
        records: &[CharacterRecord],
        policy: EmptyDecompositionPolicy,
    ) -> Result<DecompositionCounts> {
        let mut counts = DecompositionCounts::default();
        let mut buf = [0u8; 4];

        for (index, record) in records.iter().enumerate() {
            match record.decomposition_category() {
                Some(category) => counts.table.increment(category.encode_utf8(&mut buf)),
                None => match policy {
                    EmptyDecompositionPolicy::Skip => counts.skipped += 1,
                    EmptyDecompositionPolicy::Fail => {
                        return Err(StatsError::EmptyDecomposition {
                            index: index + 1,
                            character: record.character.clone(),
                        });
                    }
                },
            }
        }

        if counts.skipped > 0 {
            warn!(
                "Skipped {} records with an empty decomposition",
                counts.skipped
            );
        }
        debug!("Decomposition table: {} keys", counts.table.len());
        Ok(counts)
    }

    /// Count records per etymology type, ignoring records without etymology.
    pub fn etymologies(records: &[CharacterRecord]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for kind in records.iter().filter_map(CharacterRecord::etymology_type) {
            table.increment(kind);
        }
        debug!("Etymology table: {} keys", table.len());
        table
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
