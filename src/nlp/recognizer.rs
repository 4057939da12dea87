// ============================================================
// Layer 5 — Entity Recognizer
// ============================================================
// Rule-based named-entity recognition. Runs after the entity
// ruler and never touches tokens that already belong to an
// entity, so ruler patterns always win.
//
// Rules run in this order (earlier rules claim tokens first):
//
//   GPE / NORP / ORG   gazetteer, longest match first
//   PERSON             word after a title (mr, mrs, dr, ...)
//   MONEY              "$ 500", "rs 500", "rs500", "500 rupees"
//   PERCENT            "40 %", "40 percent"
//   TIME               "10:30", "5pm", "5 pm", "3 hours", "tonight"
//   DATE               months, weekdays, today/tomorrow, years,
//                      "15/08/2018", "2 days (ago)", "last week"
//   ORDINAL            "1st", "third"
//   CARDINAL           any remaining run of number-like tokens
//
// Spans never cross whitespace tokens.
//
// Reference: OntoNotes 5 entity label set (catalog.ldc.upenn.edu/LDC2013T19)

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::domain::annotation::Doc;
use crate::domain::traits::PipelineComponent;
use crate::nlp::lexicon::{self, CURRENCY_SYMBOLS, CURRENCY_WORDS, MONTHS, PERSON_TITLES, WEEKDAYS};

const AMPM: &[&str] = &["am", "pm", "a.m.", "p.m."];
const TIME_UNITS: &[&str] = &["hours", "hour", "hrs", "hr", "minutes", "minute", "mins", "min"];
const DATE_UNITS: &[&str] = &["days", "day", "weeks", "week", "months", "month", "years", "year"];
const RELATIVE: &[&str] = &["last", "next", "this", "coming"];
const DAY_WORDS: &[&str] = &["today", "tomorrow", "yesterday", "tmrw", "tmr"];
const DAY_PARTS: &[&str] = &["morning", "evening", "night", "afternoon"];
const PERCENT_WORDS: &[&str] = &["%", "percent", "pc"];
// Month abbreviations that are also common words
const AMBIGUOUS_MONTHS: &[&str] = &["may", "mar", "jan", "jun", "sep"];

/// One user-supplied gazetteer name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub label: String,
    pub name: String,
}

/// Lower-cased name (words joined by one space) → label
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    names: FxHashMap<String, String>,
    max_words: usize,
}

impl Gazetteer {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in GPE / NORP / ORG lists
    pub fn builtin() -> Self {
        let mut g = Self::empty();
        for (name, label) in lexicon::default_gazetteer() {
            g.insert(name, label);
        }
        g
    }

    /// Add or replace a name. Blank names are ignored.
    pub fn insert(&mut self, name: &str, label: &str) {
        let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return;
        }
        self.max_words = self.max_words.max(words.len());
        self.names.insert(words.join(" "), label.to_string());
    }

    pub fn extend(&mut self, entries: &[GazetteerEntry]) {
        for e in entries {
            self.insert(&e.name, &e.label);
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub struct EntityRecognizer {
    gazetteer: Gazetteer,
}

impl EntityRecognizer {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    fn match_gazetteer(&self, doc: &mut Doc) {
        let mut i = 0;
        while i < doc.tokens.len() {
            let mut matched = None;
            let longest = self.gazetteer.max_words().min(doc.tokens.len() - i);
            for n in (1..=longest).rev() {
                let span = &doc.tokens[i..i + n];
                if span.iter().any(|t| t.is_space) {
                    continue;
                }
                let key = span
                    .iter()
                    .map(|t| t.lower.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                if let Some(label) = self.gazetteer.lookup(&key) {
                    matched = Some((n, label.to_string()));
                    break;
                }
            }
            if let Some((n, label)) = matched {
                if doc.push_entity(i, i + n, &label) {
                    i += n;
                    continue;
                }
            }
            i += 1;
        }
    }

    fn match_titles(&self, doc: &mut Doc) {
        for i in 0..doc.tokens.len() {
            let is_title = word_at(doc, i).is_some_and(|w| PERSON_TITLES.contains(&w));
            let name_follows = doc.tokens.get(i + 1).is_some_and(|t| {
                t.is_alpha && lexicon::closed_class(&t.lower).is_none()
            });
            if is_title && name_follows {
                doc.push_entity(i + 1, i + 2, "PERSON");
            }
        }
    }

    fn match_money(&self, doc: &mut Doc) {
        for i in 0..doc.tokens.len() {
            let Some(w) = word_at(doc, i) else { continue };
            if is_compact_money(w) {
                doc.push_entity(i, i + 1, "MONEY");
            } else if CURRENCY_SYMBOLS.contains(&w) || matches!(w, "rs" | "rs." | "inr") {
                if num_at(doc, i + 1) {
                    let end = number_run_end(doc, i + 1);
                    doc.push_entity(i, end, "MONEY");
                }
            } else if num_at(doc, i) && (i == 0 || !num_at(doc, i - 1)) {
                let end = number_run_end(doc, i);
                if word_at(doc, end).is_some_and(|w| CURRENCY_WORDS.contains(&w)) {
                    doc.push_entity(i, end + 1, "MONEY");
                }
            }
        }
    }

    fn match_percent(&self, doc: &mut Doc) {
        for i in 0..doc.tokens.len() {
            if !num_at(doc, i) || (i > 0 && num_at(doc, i - 1)) {
                continue;
            }
            let end = number_run_end(doc, i);
            if word_at(doc, end).is_some_and(|w| PERCENT_WORDS.contains(&w)) {
                doc.push_entity(i, end + 1, "PERCENT");
            }
        }
    }

    fn match_time(&self, doc: &mut Doc) {
        for i in 0..doc.tokens.len() {
            let Some(w) = word_at(doc, i) else { continue };
            if is_clock(w) || is_compact_ampm(w) {
                let end = if word_at(doc, i + 1).is_some_and(|n| AMPM.contains(&n)) {
                    i + 2
                } else {
                    i + 1
                };
                doc.push_entity(i, end, "TIME");
            } else if num_at(doc, i) && (i == 0 || !num_at(doc, i - 1)) {
                let end = number_run_end(doc, i);
                let unit = word_at(doc, end);
                if unit.is_some_and(|u| AMPM.contains(&u) || TIME_UNITS.contains(&u)) {
                    doc.push_entity(i, end + 1, "TIME");
                }
            } else if matches!(w, "tonight" | "midnight" | "noon") {
                doc.push_entity(i, i + 1, "TIME");
            } else if matches!(w, "this" | "last")
                && word_at(doc, i + 1).is_some_and(|n| DAY_PARTS.contains(&n))
            {
                doc.push_entity(i, i + 2, "TIME");
            }
        }
    }

    fn match_dates(&self, doc: &mut Doc) {
        let mut i = 0;
        while i < doc.tokens.len() {
            let Some(w) = word_at(doc, i) else {
                i += 1;
                continue;
            };
            let span = if num_at(doc, i)
                && (i == 0 || !num_at(doc, i - 1))
                && !is_year(w)
                && word_at(doc, number_run_end(doc, i)).is_some_and(|u| DATE_UNITS.contains(&u))
            {
                // "2 days", "3 weeks ago"
                let mut end = number_run_end(doc, i) + 1;
                if word_at(doc, end) == Some("ago") {
                    end += 1;
                }
                Some((i, end))
            } else if RELATIVE.contains(&w)
                && word_at(doc, i + 1)
                    .is_some_and(|n| DATE_UNITS.contains(&n) || WEEKDAYS.contains(&n))
            {
                Some((i, i + 2))
            } else if DAY_WORDS.contains(&w) {
                Some((i, i + 1))
            } else if self.is_date_anchor(doc, i, w) {
                Some(self.expand_date(doc, i))
            } else {
                None
            };

            if let Some((start, end)) = span {
                if doc.push_entity(start, end, "DATE") {
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
    }

    fn is_date_anchor(&self, doc: &Doc, i: usize, w: &str) -> bool {
        if AMBIGUOUS_MONTHS.contains(&w) {
            return (i > 0 && num_or_ordinal_at(doc, i - 1)) || num_or_ordinal_at(doc, i + 1);
        }
        MONTHS.contains(&w)
            || WEEKDAYS.contains(&w)
            || is_year(w)
            || is_date_shape(w)
    }

    /// Grow an anchor over neighbouring day numbers, ordinals and
    /// years: "15 august", "august 15 2018", "15th aug"
    fn expand_date(&self, doc: &Doc, i: usize) -> (usize, usize) {
        let free = |j: usize| !doc.overlaps_entity(j, j + 1);
        let mut start = i;
        if start > 0 && num_or_ordinal_at(doc, start - 1) && free(start - 1) {
            start -= 1;
        }
        let mut end = i + 1;
        while end < doc.tokens.len() && end - i <= 2 && num_or_ordinal_at(doc, end) && free(end) {
            end += 1;
        }
        (start, end)
    }

    fn match_ordinals(&self, doc: &mut Doc) {
        for i in 0..doc.tokens.len() {
            if word_at(doc, i).is_some_and(is_ordinal) {
                doc.push_entity(i, i + 1, "ORDINAL");
            }
        }
    }

    fn match_cardinals(&self, doc: &mut Doc) {
        let mut i = 0;
        while i < doc.tokens.len() {
            if num_at(doc, i) && !doc.overlaps_entity(i, i + 1) {
                let mut end = i + 1;
                while num_at(doc, end) && !doc.overlaps_entity(end, end + 1) {
                    end += 1;
                }
                doc.push_entity(i, end, "CARDINAL");
                i = end;
            } else {
                i += 1;
            }
        }
    }
}

impl PipelineComponent for EntityRecognizer {
    fn name(&self) -> &'static str {
        "ner"
    }

    fn process(&self, doc: &mut Doc) {
        self.match_gazetteer(doc);
        self.match_titles(doc);
        self.match_money(doc);
        self.match_percent(doc);
        self.match_time(doc);
        self.match_dates(doc);
        self.match_ordinals(doc);
        self.match_cardinals(doc);
    }
}

// ─── Token shape helpers ──────────────────────────────────────────────────────

/// Lower-cased text of token `i` unless it is whitespace
fn word_at(doc: &Doc, i: usize) -> Option<&str> {
    doc.tokens
        .get(i)
        .filter(|t| !t.is_space)
        .map(|t| t.lower.as_str())
}

fn num_at(doc: &Doc, i: usize) -> bool {
    doc.tokens.get(i).is_some_and(|t| t.like_num)
}

fn num_or_ordinal_at(doc: &Doc, i: usize) -> bool {
    num_at(doc, i) || word_at(doc, i).is_some_and(is_ordinal)
}

/// First index at or after `i` that is not number-like
fn number_run_end(doc: &Doc, i: usize) -> usize {
    let mut end = i;
    while num_at(doc, end) {
        end += 1;
    }
    end
}

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:19|20)[0-9]{2}$").expect("year pattern should compile")
});

/// dd/mm, dd-mm, dd/mm/yy, dd-mm-yyyy
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}[/-][0-9]{1,2}(?:[/-](?:[0-9]{2}|[0-9]{4}))?$")
        .expect("date shape pattern should compile")
});

/// hh:mm
static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("clock pattern should compile")
});

/// 5pm, 11am
static COMPACT_AMPM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}(?:am|pm)$").expect("am/pm pattern should compile")
});

/// rs500, rs.2000
static COMPACT_MONEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rs\.?[0-9]{2,}$").expect("money pattern should compile")
});

/// 1st, 22nd, 103rd
static NUMERIC_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}(?:st|nd|rd|th)$").expect("ordinal pattern should compile")
});

fn is_year(w: &str) -> bool {
    YEAR.is_match(w)
}

fn is_date_shape(w: &str) -> bool {
    DATE_SHAPE.is_match(w)
}

fn is_clock(w: &str) -> bool {
    CLOCK.is_match(w)
}

fn is_compact_ampm(w: &str) -> bool {
    COMPACT_AMPM.is_match(w)
}

fn is_compact_money(w: &str) -> bool {
    COMPACT_MONEY.is_match(w)
}

fn is_ordinal(w: &str) -> bool {
    lexicon::is_ordinal_word(w) || NUMERIC_ORDINAL.is_match(w)
}
