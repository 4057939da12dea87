// ============================================================
// Layer 3 — Annotation Types
// ============================================================
// The output of running text through the NLP pipeline:
//
//   Doc
//     ├── tokens: Vec<Token>   (each with a PosTag)
//     └── ents:   Vec<Entity>  (half-open token spans)
//
// Token flags are filled in once by the tokenizer; the tagger
// only writes `pos`, and entity components only write `ents`.
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal part-of-speech tags, plus SPACE for whitespace tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    CoordConj,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    SubordConj,
    Symbol,
    Verb,
    Other,
    Space,
}

impl PosTag {
    /// Upper-case label as printed in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adjective => "ADJ",
            PosTag::Adposition => "ADP",
            PosTag::Adverb => "ADV",
            PosTag::Auxiliary => "AUX",
            PosTag::CoordConj => "CCONJ",
            PosTag::Determiner => "DET",
            PosTag::Interjection => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Pronoun => "PRON",
            PosTag::ProperNoun => "PROPN",
            PosTag::Punctuation => "PUNCT",
            PosTag::SubordConj => "SCONJ",
            PosTag::Symbol => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Other => "X",
            PosTag::Space => "SPACE",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its surface form and lexical flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text exactly as it appeared
    pub text: String,
    /// Lower-cased text
    pub lower: String,
    /// Char offset of the token in the source text
    pub idx: usize,
    /// Whether a single trailing space followed this token
    pub whitespace: bool,

    pub is_space: bool,
    pub is_punct: bool,
    pub is_alpha: bool,
    pub is_digit: bool,
    pub like_num: bool,
    pub like_url: bool,
    pub like_email: bool,

    /// Assigned by the tagger; `Other` until then
    pub pos: PosTag,
}

/// A labelled entity span over `tokens[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub text: String,
}

/// An annotated text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doc {
    pub text: String,
    pub tokens: Vec<Token>,
    pub ents: Vec<Entity>,
}

impl Doc {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
            ents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if any token in `start..end` already belongs to an entity
    pub fn overlaps_entity(&self, start: usize, end: usize) -> bool {
        self.ents.iter().any(|e| start < e.end && e.start < end)
    }

    /// Surface text of `tokens[start..end]`, rebuilt with the
    /// original single-space whitespace between tokens
    pub fn span_text(&self, start: usize, end: usize) -> String {
        let mut out = String::new();
        for (i, tok) in self.tokens[start..end].iter().enumerate() {
            out.push_str(&tok.text);
            if tok.whitespace && start + i + 1 < end {
                out.push(' ');
            }
        }
        out
    }

    /// Add an entity over `start..end` unless it would overlap an
    /// existing one. Entities stay sorted by start position.
    /// Returns true if the span was added.
    pub fn push_entity(&mut self, start: usize, end: usize, label: &str) -> bool {
        if start >= end || end > self.tokens.len() || self.overlaps_entity(start, end) {
            return false;
        }
        let ent = Entity {
            start,
            end,
            label: label.to_string(),
            text: self.span_text(start, end),
        };
        let at = self.ents.partition_point(|e| e.start < start);
        self.ents.insert(at, ent);
        true
    }

    /// Label of the entity covering token `i`, if any
    pub fn entity_label_at(&self, i: usize) -> Option<&str> {
        self.ents
            .iter()
            .find(|e| e.start <= i && i < e.end)
            .map(|e| e.label.as_str())
    }
}
