// ============================================================
// Layer 5 — Tokenizer
// ============================================================
// Splits raw text into Tokens, spaCy style:
//
//   1. Whitespace separates chunks. A single ' ' after a token is
//      recorded as `whitespace = true`; any other whitespace run
//      becomes its own SPACE token ("a  b" → "a", " ", "b").
//   2. Each chunk is peeled from both ends:
//        prefixes   " ' ( [ { < * # @ $ £ € ₹ ¿ ¡ “ ‘ « emoji
//        suffixes   . , ! ? ; : ' " ) ] } > * % … ” ’ » emoji "..."
//        contractions  n't 's 're 've 'll 'd 'm  (and ’ forms)
//   3. What is left is split on infixes:
//        "..." / "…"   anywhere
//        , ! ? ; :     between two non-digits ("10:30" survives)
//        /             between two letters
//
// Protected forms are never peeled or split:
//   - URLs and e-mail addresses (trailing punctuation still comes off)
//   - masked names such as "A***B"
//   - abbreviations such as "mr." or "u.s."
//
// Hyphens inside words are kept: "life-jacket" is one token.
//
// Reference: spaCy tokenizer algorithm (spacy.io/usage/linguistic-features#how-tokenizer-works)
//            Rust Book §8 (Strings — UTF-8 and char boundaries)

use rustc_hash::FxHashSet;

use crate::domain::annotation::{PosTag, Token};
use crate::nlp::lexicon;

const PREFIX_CHARS: &[char] = &[
    '"', '\'', '(', '[', '{', '<', '*', '#', '@', '$', '£', '€', '₹', '¿', '¡', '“', '‘', '«',
];

const SUFFIX_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', ')', ']', '}', '>', '*', '%', '…', '”', '’', '»',
];

/// The only suffixes peeled off a URL or e-mail address
const URL_TRAILING: &[char] = &['.', ',', '!', '?', ';', ':', ')', ']', '"', '\''];

const CONTRACTIONS: &[&str] = &[
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "st.", "vs.", "etc.", "jr.", "sr.", "govt.", "dept.", "approx.",
    "rs.", "ph.", "e.g.", "i.e.", "a.m.", "p.m.",
];

/// Punctuation characters outside the ASCII range
const UNICODE_PUNCT: &[char] = &[
    '…', '“', '”', '‘', '’', '–', '—', '«', '»', '¡', '¿', '·', '•', '‹', '›', '„', '‐', '‑',
    '、', '。',
];

pub struct Tokenizer {
    abbreviations: FxHashSet<&'static str>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Tokenize a text. Offsets (`idx`) are in chars.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut i = 0usize;

        while i < chars.len() {
            let mut j = i;
            if chars[i].is_whitespace() {
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                // The first ' ' after a word belongs to that word
                let mut rest = i;
                if let Some(last) = tokens.last_mut() {
                    if !last.is_space && chars[i] == ' ' {
                        last.whitespace = true;
                        rest = i + 1;
                    }
                }
                if rest < j {
                    let run: String = chars[rest..j].iter().collect();
                    tokens.push(make_token(&run, rest));
                }
            } else {
                while j < chars.len() && !chars[j].is_whitespace() {
                    j += 1;
                }
                let chunk: String = chars[i..j].iter().collect();
                let mut offset = i;
                for piece in self.split_chunk(&chunk) {
                    tokens.push(make_token(piece, offset));
                    offset += piece.chars().count();
                }
            }
            i = j;
        }

        tokens
    }

    /// Peel prefixes, suffixes and contractions off one
    /// whitespace-free chunk, then split the core on infixes.
    fn split_chunk<'a>(&self, chunk: &'a str) -> Vec<&'a str> {
        let mut prefixes: Vec<&'a str> = Vec::new();
        let mut suffixes: Vec<&'a str> = Vec::new();
        let mut s = chunk;
        let mut protected = false;

        while !s.is_empty() {
            if is_masked_name(s) || self.is_abbreviation(s) {
                protected = true;
                break;
            }
            let url_like = like_url(s) || like_email(s);

            if !url_like {
                if let Some(n) = prefix_len(s) {
                    prefixes.push(&s[..n]);
                    s = &s[n..];
                    continue;
                }
            }
            if let Some(n) = suffix_len(s, url_like) {
                suffixes.push(&s[s.len() - n..]);
                s = &s[..s.len() - n];
                continue;
            }
            if !url_like {
                if let Some(n) = contraction_len(s) {
                    suffixes.push(&s[s.len() - n..]);
                    s = &s[..s.len() - n];
                    continue;
                }
            }
            protected = url_like;
            break;
        }

        let mut out = prefixes;
        if !s.is_empty() {
            if protected {
                out.push(s);
            } else {
                out.extend(split_infixes(s));
            }
        }
        out.extend(suffixes.into_iter().rev());
        out
    }

    fn is_abbreviation(&self, s: &str) -> bool {
        let lower = s.to_lowercase();
        if self.abbreviations.contains(lower.as_str()) {
            return true;
        }
        // Dotted initialisms: "u.s.", "u.k.", "n.d.r.f."
        let bytes = lower.as_bytes();
        bytes.len() >= 4
            && bytes.len() % 2 == 0
            && bytes
                .chunks(2)
                .all(|pair| pair[0].is_ascii_alphabetic() && pair[1] == b'.')
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Chunk helpers ────────────────────────────────────────────────────────────

fn prefix_len(s: &str) -> Option<usize> {
    let c = s.chars().next()?;
    if s.chars().count() > 1 && (PREFIX_CHARS.contains(&c) || is_pictographic(c)) {
        Some(c.len_utf8())
    } else {
        None
    }
}

fn suffix_len(s: &str, url_like: bool) -> Option<usize> {
    if s.chars().count() < 2 {
        return None;
    }
    if url_like {
        let c = s.chars().next_back()?;
        return URL_TRAILING.contains(&c).then(|| c.len_utf8());
    }
    if s.ends_with("...") {
        // a bare "..." stays whole
        return (s.len() > 3).then_some(3);
    }
    let c = s.chars().next_back()?;
    if SUFFIX_CHARS.contains(&c) || is_pictographic(c) {
        Some(c.len_utf8())
    } else {
        None
    }
}

fn contraction_len(s: &str) -> Option<usize> {
    let lower = s.to_lowercase();
    CONTRACTIONS.iter().find_map(|suffix| {
        let stem_len = lower.len().checked_sub(suffix.len())?;
        let stem_ok = stem_len > 0
            && lower.ends_with(suffix)
            && lower[..stem_len]
                .chars()
                .next_back()
                .is_some_and(char::is_alphabetic);
        // to_lowercase never changes the byte length of these ASCII
        // and curly-quote suffixes, so the length maps back onto `s`
        stem_ok.then_some(suffix.len())
    })
}

fn split_infixes(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0usize;
    let mut k = 0usize;

    while k < chars.len() {
        let (b, c) = chars[k];

        let ellipsis = if c == '…' {
            Some((c.len_utf8(), 1))
        } else if s[b..].starts_with("...") {
            Some((3, 3))
        } else {
            None
        };
        if let Some((bytes, n_chars)) = ellipsis {
            if b > start {
                pieces.push(&s[start..b]);
            }
            pieces.push(&s[b..b + bytes]);
            start = b + bytes;
            k += n_chars;
            continue;
        }

        if k > 0 && k + 1 < chars.len() {
            let prev = chars[k - 1].1;
            let next = chars[k + 1].1;
            let split = match c {
                ',' | '!' | '?' | ';' | ':' => !(prev.is_ascii_digit() && next.is_ascii_digit()),
                '/' => prev.is_alphabetic() && next.is_alphabetic(),
                _ => false,
            };
            if split {
                if b > start {
                    pieces.push(&s[start..b]);
                }
                pieces.push(&s[b..b + c.len_utf8()]);
                start = b + c.len_utf8();
            }
        }
        k += 1;
    }

    if start < s.len() {
        pieces.push(&s[start..]);
    }
    pieces
}

// ─── Token flags ──────────────────────────────────────────────────────────────

fn make_token(text: &str, idx: usize) -> Token {
    let lower = text.to_lowercase();
    let is_space = text.chars().all(char::is_whitespace);
    Token {
        is_space,
        is_punct: !is_space && text.chars().all(is_punct_char),
        is_alpha: text.chars().all(char::is_alphabetic),
        is_digit: text.chars().all(|c| c.is_ascii_digit()),
        like_num: like_num(&lower),
        like_url: like_url(text),
        like_email: like_email(text),
        text: text.to_string(),
        lower,
        idx,
        whitespace: false,
        pos: if is_space { PosTag::Space } else { PosTag::Other },
    }
}

pub fn is_punct_char(c: char) -> bool {
    match c {
        // ASCII symbols that are not punctuation
        '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~' => false,
        c if c.is_ascii_punctuation() => true,
        c => UNICODE_PUNCT.contains(&c),
    }
}

/// Emoji and pictographs, plus the joiners that glue them together
pub fn is_pictographic(c: char) -> bool {
    matches!(c as u32,
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0xFE0F | 0x200D)
}

/// Letter runs separated by one or more `*` runs: "A***B", "ra**ul"
pub fn is_masked_name(s: &str) -> bool {
    let first = s.chars().next();
    let last = s.chars().next_back();
    matches!((first, last), (Some(f), Some(l)) if f.is_alphabetic() && l.is_alphabetic())
        && s.contains('*')
        && s.chars().all(|c| c == '*' || c.is_alphabetic())
}

pub fn like_num(lower: &str) -> bool {
    let s = lower.trim_start_matches(['+', '-', '~', '±']);
    if s.is_empty() {
        return false;
    }
    if lexicon::is_number_word(s) {
        return true;
    }
    // 12 / 1,000 / 2.5 / 3/4
    let first_digit = s.chars().next().is_some_and(|c| c.is_ascii_digit());
    let last_digit = s.chars().next_back().is_some_and(|c| c.is_ascii_digit());
    first_digit
        && last_digit
        && s.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '/'))
        && s.matches('/').count() <= 1
}

pub fn like_url(s: &str) -> bool {
    let lower = s.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.") {
        return lower.len() > 7;
    }
    const TLDS: &[&str] = &[".com", ".org", ".net", ".in", ".gov", ".io", ".co", ".info", ".ly"];
    let host = lower.split('/').next().unwrap_or("");
    !host.contains('@')
        && host.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && TLDS.iter().any(|tld| host.ends_with(tld) && host.len() > tld.len())
}

pub fn like_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<String> {
        Tokenizer::new()
            .tokenize(s)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_splits_trailing_punctuation() {
        assert_eq!(texts("Need help, urgently!"), vec!["Need", "help", ",", "urgently", "!"]);
    }

    #[test]
    fn test_keeps_masked_name_whole() {
        assert_eq!(texts("Contact A***B now"), vec!["Contact", "A***B", "now"]);
        assert_eq!(texts("(A***B),"), vec!["(", "A***B", ")", ","]);
    }

    #[test]
    fn test_splits_hashtag_and_mention() {
        assert_eq!(texts("#KeralaFloods @ndrf"), vec!["#", "KeralaFloods", "@", "ndrf"]);
    }

    #[test]
    fn test_contractions() {
        assert_eq!(texts("can't reach"), vec!["ca", "n't", "reach"]);
        assert_eq!(texts("we're stuck"), vec!["we", "'re", "stuck"]);
        assert_eq!(texts("mother's"), vec!["mother", "'s"]);
    }

    #[test]
    fn test_keeps_url_and_email() {
        assert_eq!(
            texts("see https://keralarescue.in/request."),
            vec!["see", "https://keralarescue.in/request", "."]
        );
        assert_eq!(texts("mail help@relief.org"), vec!["mail", "help@relief.org"]);
    }

    #[test]
    fn test_infixes() {
        assert_eq!(texts("food,water"), vec!["food", ",", "water"]);
        assert_eq!(texts("10:30"), vec!["10:30"]);
        assert_eq!(texts("1,000"), vec!["1,000"]);
        assert_eq!(texts("food/water"), vec!["food", "/", "water"]);
        assert_eq!(texts("wait...help"), vec!["wait", "...", "help"]);
    }

    #[test]
    fn test_keeps_internal_hyphen() {
        assert_eq!(texts("life-jackets needed"), vec!["life-jackets", "needed"]);
    }

    #[test]
    fn test_trailing_ellipsis_is_one_token() {
        assert_eq!(texts("please..."), vec!["please", "..."]);
    }

    #[test]
    fn test_bare_ellipsis_is_one_token() {
        assert_eq!(texts("wait ..."), vec!["wait", "..."]);
        assert_eq!(texts("... help...."), vec!["...", "help", ".", "..."]);
    }

    #[test]
    fn test_abbreviations_keep_period() {
        assert_eq!(texts("Dr. Rao"), vec!["Dr.", "Rao"]);
        assert_eq!(texts("u.s. aid"), vec!["u.s.", "aid"]);
    }

    #[test]
    fn test_space_tokens() {
        let toks = Tokenizer::new().tokenize("a  b\nc");
        let t: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(t, vec!["a", " ", "b", "\n", "c"]);
        assert!(toks[0].whitespace);
        assert!(toks[1].is_space);
        assert_eq!(toks[1].pos, PosTag::Space);
        assert!(!toks[2].whitespace);
    }

    #[test]
    fn test_offsets_are_char_based() {
        let toks = Tokenizer::new().tokenize("₹500 now");
        assert_eq!(toks[0].text, "₹");
        assert_eq!(toks[1].idx, 1);
        assert_eq!(toks[2].idx, 5);
    }

    #[test]
    fn test_emoji_split_off() {
        assert_eq!(texts("help🙏🙏"), vec!["help", "🙏", "🙏"]);
    }

    #[test]
    fn test_flags() {
        let toks = Tokenizer::new().tokenize("Kerala 1,200 ! +");
        assert!(toks[0].is_alpha);
        assert!(toks[1].like_num && !toks[1].is_digit);
        assert!(toks[2].is_punct);
        assert!(!toks[3].is_punct);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new().tokenize("").is_empty());
    }

    #[test]
    fn test_like_num() {
        assert!(like_num("12"));
        assert!(like_num("2.5"));
        assert!(like_num("3/4"));
        assert!(like_num("-5"));
        assert!(like_num("twenty"));
        assert!(!like_num("1st"));
        assert!(!like_num("10:30"));
        assert!(!like_num("a1"));
    }
}
