// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that describe what the
// report is made of: messages, annotated documents, tokens,
// entity spans and label frequency tables.
//
// Rules for this layer:
//   - NO spreadsheet or file I/O
//   - NO lexicons or tagging rules (that's Layer 5 — nlp)
//   - NO printing
//
// Everything above and below this layer speaks in these types,
// so the annotator can be swapped without touching the report.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A single message read from the spreadsheet
pub mod message;

// Token, PosTag, Entity and Doc — the output of annotation
pub mod annotation;

// Label → count tallies with Counter-style ordering
pub mod frequency;

// Core abstractions (traits) that other layers implement
pub mod traits;
