// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the spreadsheet on disk and the cleaned
// token lists the second NLP pass consumes.
//
//   sample.xlsx
//       │
//       ▼
//   SpreadsheetLoader → one Message per non-empty cell
//       │
//       ▼
//   Preprocessor      → strip, normalise odd whitespace
//       │
//       ▼
//   (nlp::Pipeline — pass 1)
//       │
//       ▼
//   TokenCleaner      → drop space / punct / stop words,
//                       lower-case, strip edge hyphens
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads a named column from xlsx / xls / ods via calamine
pub mod loader;

/// Cleans and normalises raw cell text
pub mod preprocessor;

/// Stop-word sets from the stop-words crate plus extras
pub mod stopwords;

/// Token filtering predicate and normalisation
pub mod cleaner;
