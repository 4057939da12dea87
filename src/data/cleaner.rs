// ============================================================
// Layer 4 — Token Cleaner
// ============================================================
// Turns an annotated Doc into the cleaned token list that the
// second NLP pass runs over.
//
// A token is KEPT when it is:
//   - not whitespace
//   - not punctuation
//   - not a stop word (compared lower-cased)
//
// Kept tokens are lower-cased and have leading/trailing '-'
// stripped ("-urgent-" → "urgent", "life-jacket" unchanged).
// A token that strips down to nothing is dropped.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::data::stopwords::StopwordFilter;
use crate::domain::annotation::{Doc, Token};

pub struct TokenCleaner {
    stopwords: StopwordFilter,
}

impl TokenCleaner {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// The filtering predicate
    pub fn keep(&self, tok: &Token) -> bool {
        !tok.is_space && !tok.is_punct && !self.stopwords.is_stopword(&tok.lower)
    }

    /// Lower-case form with edge hyphens removed
    pub fn normalize(&self, tok: &Token) -> String {
        tok.lower.trim_matches('-').to_string()
    }

    /// Cleaned tokens of one doc, in order
    pub fn clean_doc(&self, doc: &Doc) -> Vec<String> {
        doc.tokens
            .iter()
            .filter(|t| self.keep(t))
            .map(|t| self.normalize(t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Rebuild a text from cleaned tokens for re-annotation
    pub fn join(tokens: &[String]) -> String {
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn cleaner() -> TokenCleaner {
        TokenCleaner::new(StopwordFilter::from_list(&["we", "are", "in", "the", "#", "n't"]))
    }

    fn clean(text: &str) -> Vec<String> {
        let doc = Doc::new(text, Tokenizer::new().tokenize(text));
        cleaner().clean_doc(&doc)
    }

    #[test]
    fn test_drops_stopwords_punct_space() {
        assert_eq!(
            clean("We are  trapped in the WATER!!"),
            vec!["trapped", "water"]
        );
    }

    #[test]
    fn test_lowercases_and_strips_edge_hyphens() {
        assert_eq!(clean("-Urgent- life-jackets"), vec!["urgent", "life-jackets"]);
    }

    #[test]
    fn test_keeps_masked_names() {
        assert_eq!(clean("Contact A***B #help"), vec!["contact", "a***b", "help"]);
    }

    #[test]
    fn test_contraction_pieces() {
        // "ca" is not in this list, so it survives; "n't" does not
        assert_eq!(clean("can't"), vec!["ca"]);
    }

    #[test]
    fn test_join() {
        let toks = vec!["need".to_string(), "boat".to_string()];
        assert_eq!(TokenCleaner::join(&toks), "need boat");
        assert_eq!(TokenCleaner::join(&[]), "");
    }
}
