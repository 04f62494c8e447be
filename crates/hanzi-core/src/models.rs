use serde::{Deserialize, Deserializer};

/// Number of ranked entries the legacy report prints for a large table.
pub const LEGACY_TOP_N: usize = 9;

/// What to do with a record whose `decomposition` is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyDecompositionPolicy {
    /// Leave the record out of the decomposition table.
    #[default]
    Skip,
    /// Abort the run.
    Fail,
}

/// How many ranked entries a report section prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLimit {
    /// `min(LEGACY_TOP_N, n - 1)` for a table of `n` keys, so a small table
    /// loses its last entry.
    #[default]
    Legacy,
    /// Plain top-N: `min(limit, n)`.
    Top(usize),
}

impl ReportLimit {
    /// Number of lines to print for a table with `distinct_keys` entries.
    pub fn lines_for(self, distinct_keys: usize) -> usize {
        match self {
            ReportLimit::Legacy => distinct_keys.saturating_sub(1).min(LEGACY_TOP_N),
            ReportLimit::Top(limit) => limit.min(distinct_keys),
        }
    }
}

/// How a character's form or meaning historically arose.
///
/// Both fields are free text in the source data. An etymology where both are
/// empty is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Etymology {
    /// Coarse classification, e.g. `"pictophonetic"` or `"ideographic"`.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    /// Short explanation of the classification.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hint: String,
}

impl Etymology {
    /// `true` when neither `type` nor `hint` carries a value.
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() && self.hint.is_empty()
    }
}

/// A single dictionary entry read from one line of the dictionary file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CharacterRecord {
    /// The glyph itself.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
    /// Free-text English gloss.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub definition: String,
    /// Romanized readings. The file may store a single string or a list.
    #[serde(default, deserialize_with = "string_or_seq")]
    pub pinyin: Vec<String>,
    /// Structural description whose first character names the layout.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decomposition: String,
    /// Indexing radical; empty is its own category.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub radical: String,
    #[serde(default)]
    pub etymology: Option<Etymology>,
    /// Auxiliary stroke-matching payload, carried through untouched.
    #[serde(default)]
    pub matches: Option<serde_json::Value>,
}

impl CharacterRecord {
    /// First codepoint of `decomposition`, or `None` when it is empty.
    pub fn decomposition_category(&self) -> Option<char> {
        self.decomposition.chars().next()
    }

    /// The etymology type, when the record carries a non-empty etymology.
    ///
    /// A record whose etymology has a hint but no type yields `Some("")`.
    pub fn etymology_type(&self) -> Option<&str> {
        self.etymology
            .as_ref()
            .filter(|e| !e.is_empty())
            .map(|e| e.kind.as_str())
    }
}

// ── Serde helpers ─────────────────────────────────────────────────────────────

/// Read a string field, mapping JSON `null` to the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept `"shuǐ"`, `["shuǐ"]` or `null` for a list-of-strings field.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) if s.is_empty() => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}
