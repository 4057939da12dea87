// ============================================================
// Layer 5 — Entity Ruler
// ============================================================
// Pattern-driven entity detection that runs BEFORE the rule
// recognizer, so its spans take precedence.
//
// A pattern is a label plus one regex per token:
//
//   { "label": "PERSON", "pattern": ["^[A-Za-z]\\*+[A-Za-z]$"] }
//
// matches any single token shaped like an anonymised name
// ("A***B"). Multi-element patterns match runs of consecutive
// tokens, element i against token i of the run.
//
// Matching is leftmost-first; at each position the longest
// pattern wins, and spans never overlap existing entities.
//
// Reference: spaCy EntityRuler token patterns (spacy.io/api/entityruler)

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::annotation::Doc;
use crate::domain::traits::PipelineComponent;

/// Regex matching the masked-name convention used in the messages
pub const MASKED_NAME_REGEX: &str = r"^[A-Za-z]\*+[A-Za-z]$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPattern {
    pub label: String,
    /// One regex per token, matched against the token's text
    pub pattern: Vec<String>,
}

impl EntityPattern {
    pub fn new(label: impl Into<String>, pattern: &[&str]) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// PERSON for "A***B"-style anonymised names
    pub fn masked_person() -> Self {
        Self::new("PERSON", &[MASKED_NAME_REGEX])
    }
}

struct CompiledPattern {
    label: String,
    tokens: Vec<Regex>,
}

pub struct EntityRuler {
    patterns: Vec<CompiledPattern>,
}

impl EntityRuler {
    /// Compile the patterns. Fails on an empty pattern or a regex
    /// that does not compile.
    pub fn new(patterns: &[EntityPattern]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for p in patterns {
            if p.pattern.is_empty() {
                bail!("entity pattern for label '{}' has no token patterns", p.label);
            }
            let tokens = p
                .pattern
                .iter()
                .map(|re| {
                    Regex::new(re).with_context(|| {
                        format!("invalid regex '{}' in entity pattern '{}'", re, p.label)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            compiled.push(CompiledPattern {
                label: p.label.clone(),
                tokens,
            });
        }
        // Longest first so a two-token pattern beats a one-token
        // pattern starting at the same position
        compiled.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
        Ok(Self { patterns: compiled })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn match_at(&self, doc: &Doc, start: usize) -> Option<(usize, &str)> {
        self.patterns.iter().find_map(|p| {
            let end = start + p.tokens.len();
            if end > doc.tokens.len() {
                return None;
            }
            let hit = p
                .tokens
                .iter()
                .zip(&doc.tokens[start..end])
                .all(|(re, tok)| !tok.is_space && re.is_match(&tok.text));
            hit.then_some((end, p.label.as_str()))
        })
    }
}

impl PipelineComponent for EntityRuler {
    fn name(&self) -> &'static str {
        "entity_ruler"
    }

    fn process(&self, doc: &mut Doc) {
        let mut i = 0;
        while i < doc.tokens.len() {
            let found = self
                .match_at(doc, i)
                .map(|(end, label)| (end, label.to_string()));
            if let Some((end, label)) = found {
                if doc.push_entity(i, end, &label) {
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn run(ruler: &EntityRuler, text: &str) -> Doc {
        let mut doc = Doc::new(text, Tokenizer::new().tokenize(text));
        ruler.process(&mut doc);
        doc
    }

    #[test]
    fn test_masked_name_is_person() {
        let ruler = EntityRuler::new(&[EntityPattern::masked_person()]).unwrap();
        let doc = run(&ruler, "please contact R***a or s**k");
        let got: Vec<(&str, &str)> = doc
            .ents
            .iter()
            .map(|e| (e.text.as_str(), e.label.as_str()))
            .collect();
        assert_eq!(got, vec![("R***a", "PERSON"), ("s**k", "PERSON")]);
    }

    #[test]
    fn test_masked_pattern_needs_single_letters() {
        let ruler = EntityRuler::new(&[EntityPattern::masked_person()]).unwrap();
        // more than one letter on a side does not match ^[A-Za-z]\*+[A-Za-z]$
        assert!(run(&ruler, "ra**ul").ents.is_empty());
        assert!(run(&ruler, "ab").ents.is_empty());
    }

    #[test]
    fn test_multi_token_pattern_prefers_longest() {
        let ruler = EntityRuler::new(&[
            EntityPattern::new("GPE", &["^kerala$"]),
            EntityPattern::new("EVENT", &["^kerala$", "^floods?$"]),
        ])
        .unwrap();
        let doc = run(&ruler, "kerala floods today");
        assert_eq!(doc.ents.len(), 1);
        assert_eq!(doc.ents[0].label, "EVENT");
        assert_eq!(doc.ents[0].text, "kerala floods");
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let err = EntityRuler::new(&[EntityPattern::new("BAD", &["(unclosed"])]);
        assert!(err.is_err());
        assert!(EntityRuler::new(&[EntityPattern::new("EMPTY", &[])]).is_err());
    }

    #[test]
    fn test_pattern_serde_shape() {
        let json = r#"{"label":"PERSON","pattern":["^[A-Za-z]\\*+[A-Za-z]$"]}"#;
        let p: EntityPattern = serde_json::from_str(json).unwrap();
        assert_eq!(p, EntityPattern::masked_person());
    }
}
