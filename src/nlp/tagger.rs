// ============================================================
// Layer 5 — Part-of-Speech Tagger
// ============================================================
// Rule-based tagger over the Universal POS tag set.
//
// Pass 1 tags each token in isolation, first rule wins:
//
//   SPACE → PUNCT → SYM → NUM → X (url / email / mixed symbols)
//         → closed-class lexicon → verb lexicon
//         → PROPN (Capitalised, not doc-initial)
//         → suffix rules → NOUN
//
// Pass 2 sweeps left to right and fixes two common confusions:
//   - NOUN after "to" or a modal/auxiliary    → VERB  ("to help")
//   - lexicon VERB directly after a determiner → NOUN  ("a call")
//
// Reference: Brill (1992), "A simple rule-based part of speech tagger"

use crate::domain::annotation::{Doc, PosTag, Token};
use crate::domain::traits::PipelineComponent;
use crate::nlp::{lexicon, tokenizer};

#[derive(Debug, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_one(&self, tok: &Token, doc_initial: bool) -> PosTag {
        if tok.is_space {
            return PosTag::Space;
        }
        if tok.is_punct {
            return PosTag::Punctuation;
        }
        if tok.text.chars().all(is_symbol_char) {
            return PosTag::Symbol;
        }
        if tok.like_num {
            return PosTag::Numeral;
        }
        if tok.like_url || tok.like_email {
            return PosTag::Other;
        }
        let has_alpha = tok.text.chars().any(char::is_alphabetic);
        let word_like = tok
            .text
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '\'' | '’' | '.'));
        if !word_like {
            // "a***b", "help🙏" glued forms
            return if has_alpha { PosTag::Other } else { PosTag::Symbol };
        }
        if let Some(tag) = lexicon::closed_class(&tok.lower) {
            return tag;
        }
        if lexicon::is_known_verb(&tok.lower) {
            return PosTag::Verb;
        }
        if !tok.is_alpha {
            // alphanumerics like "covid19", hyphenated compounds
            return if tok.lower.contains('-') {
                lexicon::suffix_guess(tok.lower.rsplit('-').next().unwrap_or(""))
            } else {
                PosTag::Noun
            };
        }
        if !doc_initial && is_capitalised(&tok.text) {
            return PosTag::ProperNoun;
        }
        lexicon::suffix_guess(&tok.lower)
    }
}

impl PipelineComponent for PosTagger {
    fn name(&self) -> &'static str {
        "tagger"
    }

    fn process(&self, doc: &mut Doc) {
        // ── Pass 1: lexical tags ──────────────────────────────────────────────
        let mut seen_word = false;
        for tok in doc.tokens.iter_mut() {
            tok.pos = self.tag_one(tok, !seen_word);
            if !tok.is_space && !tok.is_punct {
                seen_word = true;
            }
        }

        // ── Pass 2: contextual fixes ──────────────────────────────────────────
        let mut prev: Option<(PosTag, String)> = None;
        for tok in doc.tokens.iter_mut() {
            if tok.is_space {
                continue;
            }
            if let Some((prev_tag, prev_lower)) = &prev {
                let after_to = *prev_tag == PosTag::Particle && prev_lower == "to";
                let after_aux = *prev_tag == PosTag::Auxiliary && lexicon::is_modal_or_aux(prev_lower);
                if tok.pos == PosTag::Noun && tok.is_alpha && (after_to || after_aux) {
                    tok.pos = PosTag::Verb;
                } else if tok.pos == PosTag::Verb
                    && *prev_tag == PosTag::Determiner
                    && lexicon::is_known_verb(&tok.lower)
                {
                    tok.pos = PosTag::Noun;
                }
            }
            prev = Some((tok.pos, tok.lower.clone()));
        }
    }
}

fn is_symbol_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !tokenizer::is_punct_char(c)
}

fn is_capitalised(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(|c| !c.is_uppercase())
}
