//! Plain-text rendering of ranked frequency tables.

use hanzi_core::models::ReportLimit;

use crate::aggregator::FrequencyTable;

/// The three report sections, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Radicals,
    Decomposition,
    Etymology,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Radicals, Section::Decomposition, Section::Etymology];

    pub fn title(self) -> &'static str {
        match self {
            Section::Radicals => "RADICALS",
            Section::Decomposition => "DECOMPOSITION",
            Section::Etymology => "ETYMOLOGY",
        }
    }
}

/// One report line: `"<key>: <count>"`.
pub fn format_entry(key: &str, count: u64) -> String {
    format!("{}: {}", key, count)
}

/// The ranked entry lines `limit` allows for `table`.
pub fn ranked_lines(table: &FrequencyTable, limit: ReportLimit) -> Vec<String> {
    let ranked = table.ranked();
    let shown = limit.lines_for(ranked.len());
    ranked
        .into_iter()
        .take(shown)
        .map(|(key, count)| format_entry(key, count))
        .collect()
}

/// A blank separator line, the `=== TITLE ===` header, then the ranked lines.
pub fn render_section(section: Section, table: &FrequencyTable, limit: ReportLimit) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("=== {} ===\n", section.title()));
    for line in ranked_lines(table, limit) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(keys: &[&str]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for key in keys {
            table.increment(key);
        }
        table
    }

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry("水", 2), "水: 2");
        assert_eq!(format_entry("", 5), ": 5");
    }

    #[test]
    fn test_legacy_lines_drop_last_entry_of_small_table() {
        let table = table_from(&["水", "火", "水"]);
        assert_eq!(ranked_lines(&table, ReportLimit::Legacy), vec!["水: 2"]);
    }

    #[test]
    fn test_single_key_table_prints_nothing_under_legacy() {
        let table = table_from(&["水"]);
        assert!(ranked_lines(&table, ReportLimit::Legacy).is_empty());
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        let table = FrequencyTable::new();
        assert!(ranked_lines(&table, ReportLimit::Legacy).is_empty());
        assert!(ranked_lines(&table, ReportLimit::Top(10)).is_empty());
    }

    #[test]
    fn test_large_table_prints_nine_under_legacy() {
        let keys: Vec<String> = (0..20).map(|i| format!("k{:02}", i)).collect();
        let refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        let table = table_from(&refs);

        let lines = ranked_lines(&table, ReportLimit::Legacy);
        assert_eq!(lines.len(), 9);
        // All counts tie, so keys come out in ascending order.
        assert_eq!(lines[0], "k00: 1");
        assert_eq!(lines[8], "k08: 1");
    }

    #[test]
    fn test_top_limit_keeps_every_entry_of_small_table() {
        let table = table_from(&["水", "火", "水"]);
        assert_eq!(
            ranked_lines(&table, ReportLimit::Top(10)),
            vec!["水: 2", "火: 1"]
        );
    }

    #[test]
    fn test_render_section_layout() {
        let table = table_from(&["⿰", "⿰", "⿱"]);
        let text = render_section(Section::Decomposition, &table, ReportLimit::Legacy);
        assert_eq!(text, "\n=== DECOMPOSITION ===\n⿰: 2\n");
    }

    #[test]
    fn test_section_order() {
        let titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["RADICALS", "DECOMPOSITION", "ETYMOLOGY"]);
    }
}
