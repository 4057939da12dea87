// ============================================================
// Layer 2 — Analysis Configuration
// ============================================================
// Every knob of a report run, in one serialisable struct.
//
// Sources, lowest priority first:
//   1. AnalysisConfig::default()  — the analyst's fixed settings
//   2. --config file.json         — any subset of fields
//   3. CLI flags                  — override individual fields
//
// #[serde(default)] lets a config file name only the fields it
// wants to change.
//
// Reference: serde documentation (serde.rs/attr-default.html)

use serde::{Deserialize, Serialize};

use crate::data::loader::SpreadsheetLoader;
use crate::data::stopwords::{StopwordFilter, MESSAGE_DEBRIS};
use crate::nlp::recognizer::GazetteerEntry;
use crate::nlp::ruler::EntityPattern;

pub const DEFAULT_PATH: &str = "sample.xlsx";
pub const DEFAULT_COLUMN: &str = "SOS Tweet / SOS Message";
pub const DEFAULT_SKIP_ROWS: usize = 8;
pub const DEFAULT_SKIP_FOOTER: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub path: String,
    pub column: String,
    pub sheet: Option<String>,
    pub skip_rows: usize,
    pub skip_footer: usize,

    /// Stop-word language code; "en" uses spaCy's list
    pub language: String,
    /// Added on top of the language's stop words and MESSAGE_DEBRIS
    pub extra_stop_words: Vec<String>,

    /// Entity ruler patterns; replaces the default list when set
    pub entity_patterns: Vec<EntityPattern>,
    /// Added on top of the built-in gazetteer
    pub gazetteer: Vec<GazetteerEntry>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            column: DEFAULT_COLUMN.to_string(),
            sheet: None,
            skip_rows: DEFAULT_SKIP_ROWS,
            skip_footer: DEFAULT_SKIP_FOOTER,
            language: "en".to_string(),
            extra_stop_words: Vec::new(),
            entity_patterns: vec![EntityPattern::masked_person()],
            gazetteer: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Loader for the configured input
    pub fn loader(&self) -> SpreadsheetLoader {
        SpreadsheetLoader::new(&self.path, &self.column)
            .with_skip_rows(self.skip_rows)
            .with_skip_footer(self.skip_footer)
            .with_sheet(self.sheet.clone())
    }

    /// Language stop words, the message debris, then the configured extras
    pub fn stopwords(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::new(&self.language);
        filter.add_stopwords(MESSAGE_DEBRIS);
        filter.add_stopwords(&self.extra_stop_words);
        filter
    }
}

/// Optional overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub path: Option<String>,
    pub column: Option<String>,
    pub sheet: Option<String>,
    pub skip_rows: Option<usize>,
    pub skip_footer: Option<usize>,
}

impl AnalysisConfig {
    /// Apply CLI overrides on top of this config
    pub fn with_overrides(mut self, o: InputOverrides) -> Self {
        if let Some(path) = o.path {
            self.path = path;
        }
        if let Some(column) = o.column {
            self.column = column;
        }
        if o.sheet.is_some() {
            self.sheet = o.sheet;
        }
        if let Some(n) = o.skip_rows {
            self.skip_rows = n;
        }
        if let Some(n) = o.skip_footer {
            self.skip_footer = n;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_export_layout() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.path, "sample.xlsx");
        assert_eq!(cfg.column, "SOS Tweet / SOS Message");
        assert_eq!(cfg.skip_rows, 8);
        assert_eq!(cfg.skip_footer, 5);
        assert_eq!(cfg.entity_patterns, vec![EntityPattern::masked_person()]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: AnalysisConfig = serde_json::from_str(r#"{ "skip_rows": 2 }"#).unwrap();
        assert_eq!(cfg.skip_rows, 2);
        assert_eq!(cfg.skip_footer, DEFAULT_SKIP_FOOTER);
        assert_eq!(cfg.column, DEFAULT_COLUMN);
    }

    #[test]
    fn test_overrides_win() {
        let cfg = AnalysisConfig::default().with_overrides(InputOverrides {
            path: Some("other.xlsx".to_string()),
            skip_footer: Some(0),
            ..Default::default()
        });
        assert_eq!(cfg.path, "other.xlsx");
        assert_eq!(cfg.skip_footer, 0);
        assert_eq!(cfg.skip_rows, DEFAULT_SKIP_ROWS);
    }

    #[test]
    fn test_stopwords_include_extras() {
        let mut cfg = AnalysisConfig::default();
        cfg.extra_stop_words.push("rt".to_string());
        let filter = cfg.stopwords();
        assert!(filter.is_stopword("rt"));
        assert!(filter.is_stopword("a+"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_config_extras_keep_debris() {
        let cfg: AnalysisConfig =
            serde_json::from_str(r#"{ "extra_stop_words": ["rt"] }"#).unwrap();
        let filter = cfg.stopwords();
        for word in ["#", "+", "a+", "\u{2122}", "rt", "please"] {
            assert!(filter.is_stopword(word), "{word} should be a stop word");
        }
        assert!(!filter.is_stopword("help"));
        assert!(!filter.is_stopword("need"));
    }
}
