//! Main analysis pipeline.
//!
//! Loads the dictionary, builds all three frequency tables and renders the
//! report text. Every step that can fail runs before any text is produced,
//! so a failed run never yields a partial report.

use std::path::Path;

use hanzi_core::models::{CharacterRecord, EmptyDecompositionPolicy, ReportLimit};
use hanzi_core::Result;
use tracing::debug;

use crate::aggregator::{FrequencyAggregator, FrequencyTable};
use crate::reader::load_dictionary;
use crate::report::{render_section, Section};

// ── Public types ──────────────────────────────────────────────────────────────

/// Knobs that change how records are counted and reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub empty_decomposition: EmptyDecompositionPolicy,
    pub limit: ReportLimit,
}

/// All three frequency tables for one dictionary.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStats {
    /// Number of records analysed.
    pub record_count: usize,
    pub radicals: FrequencyTable,
    pub decompositions: FrequencyTable,
    pub etymologies: FrequencyTable,
    /// Records left out of `decompositions` because it was empty.
    pub skipped_decompositions: usize,
}

impl DictionaryStats {
    pub fn table(&self, section: Section) -> &FrequencyTable {
        match section {
            Section::Radicals => &self.radicals,
            Section::Decomposition => &self.decompositions,
            Section::Etymology => &self.etymologies,
        }
    }

    /// Full report: radicals, decomposition, etymology, each with its header.
    pub fn render(&self, limit: ReportLimit) -> String {
        Section::ALL
            .iter()
            .map(|&section| render_section(section, self.table(section), limit))
            .collect()
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Build the three frequency tables from already-parsed records.
pub fn analyze_records(
    records: &[CharacterRecord],
    options: &AnalysisOptions,
) -> Result<DictionaryStats> {
    let radicals = FrequencyAggregator::radicals(records);
    let decompositions = FrequencyAggregator::decompositions(records, options.empty_decomposition)?;
    let etymologies = FrequencyAggregator::etymologies(records);

    Ok(DictionaryStats {
        record_count: records.len(),
        radicals,
        decompositions: decompositions.table,
        etymologies,
        skipped_decompositions: decompositions.skipped,
    })
}

/// Load `path` and analyse it.
pub fn analyze_dictionary(path: &Path, options: &AnalysisOptions) -> Result<DictionaryStats> {
    let load_start = std::time::Instant::now();
    let records = load_dictionary(path)?;
    debug!(
        "Parsed {} records in {:.3}s",
        records.len(),
        load_start.elapsed().as_secs_f64()
    );

    analyze_records(&records, options)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
