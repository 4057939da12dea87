// ============================================================
// Layer 5 — NLP Pipeline
// ============================================================
// An in-process English annotator, built from small components
// that run in a fixed order over each text:
//
//   raw text
//       │
//       ▼
//   Tokenizer        → Tokens with lexical flags
//       │
//       ▼
//   PosTagger        → one PosTag per token
//       │
//       ▼
//   EntityRuler      → pattern spans (e.g. "A***B" → PERSON)
//       │
//       ▼
//   EntityRecognizer → rule / gazetteer spans (GPE, DATE, ...)
//       │
//       ▼
//   Doc
//
// Each step is a PipelineComponent, so steps can be replaced or
// tested on their own.
//
// Reference: spaCy processing pipeline (spacy.io/usage/processing-pipelines)

/// Closed-class word lists, verb lexicon, gazetteer data
pub mod lexicon;

/// Whitespace / prefix / suffix / infix tokenization
pub mod tokenizer;

/// Rule-based Universal POS tagger
pub mod tagger;

/// Token-regex entity patterns
pub mod ruler;

/// Rule and gazetteer entity recognizer
pub mod recognizer;

/// Component chain implementing Annotator
pub mod pipeline;
