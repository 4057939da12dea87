// ============================================================
// Layer 5 — English Lexicon
// ============================================================
// Word lists the tagger and recognizer look words up in.
//
//   closed_class()   — DET / PRON / ADP / CCONJ / SCONJ / AUX /
//                      PART / INTJ / common ADV, by exact match
//   is_known_verb()  — open-class verbs, weighted toward
//                      rescue and relief vocabulary
//   suffix_guess()   — morphology fallback for unknown words
//   default_gazetteer() — GPE / NORP / ORG names
//
// All lookups take the LOWER-CASED form. Tables are built once
// on first use and are read-only afterwards.
//
// Reference: Universal Dependencies POS tag set (universaldependencies.org/u/pos)

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

use crate::domain::annotation::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose", "whatever",
    "whichever", "much", "many", "few", "several",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "someone", "somebody", "anyone", "anybody", "everyone", "everybody", "noone", "nobody",
    "something", "anything", "everything", "nothing", "one", "u", "ur",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "of", "about", "into", "over", "under",
    "after", "before", "between", "through", "during", "without", "within", "near", "across",
    "against", "along", "around", "behind", "below", "beside", "besides", "beyond", "onto",
    "per", "toward", "towards", "upon", "via", "amid", "among", "amongst", "inside", "outside",
    "till", "like", "than", "throughout", "despite", "except", "opposite",
];

const COORD_CONJ: &[&str] = &["and", "or", "but", "nor", "&", "plus"];

const SUBORD_CONJ: &[&str] = &[
    "if", "because", "although", "though", "while", "whether", "unless", "until", "since", "as",
    "once", "whereas", "so", "cause", "coz", "bcoz", "bcz",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "'re",
    "'ve", "'ll", "'d", "'m", "ca", "wo", "sha", "ai", "im",
];

const PARTICLES: &[&str] = &["not", "n't", "nt", "to", "'s", "’s"];

const INTERJECTIONS: &[&str] = &[
    "please", "pls", "plz", "plss", "hi", "hello", "hey", "oh", "ok", "okay", "yes", "yeah",
    "thanks", "thank", "thx", "wow", "ugh", "alas", "bye", "sos", "omg", "oops", "hmm",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "now", "then", "here", "there", "always", "never", "soon",
    "already", "still", "again", "even", "only", "quite", "really", "almost", "often", "ever",
    "ago", "away", "back", "asap", "not", "up", "down", "out", "off", "more", "most", "less",
    "least", "well", "yet", "why", "how", "when", "where", "together", "else", "instead",
    "anymore", "tomorrow", "today", "tonight", "yesterday", "currently",
];

/// Open-class verbs the suffix rules would miss (bare forms and
/// irregular past forms). Hand-picked for disaster-relief text.
const VERBS: &[&str] = &[
    "need", "needs", "help", "helps", "send", "sent", "save", "call", "get", "got", "go", "went",
    "gone", "come", "came", "give", "gave", "given", "take", "took", "taken", "make", "made",
    "know", "knew", "known", "see", "saw", "seen", "want", "stuck", "trapped", "rescue",
    "require", "requires", "contact", "provide", "share", "pray", "die", "dying", "left",
    "leave", "reach", "find", "found", "lost", "bring", "brought", "keep", "kept", "let",
    "move", "evacuate", "shift", "tell", "told", "say", "said", "think", "thought", "feel",
    "felt", "run", "ran", "live", "stay", "wait", "try", "tried", "pick", "search", "inform",
    "spread", "retweet", "rt", "drown", "drowning", "flooded", "submerged", "struck", "hit",
    "arrange", "dispatch", "reply", "respond", "update", "confirm", "check", "ask", "asked",
    "request", "donate", "deliver", "use", "work", "connect", "reached",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "lakh", "lakhs", "crore", "crores", "million", "billion", "dozen",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth",
];

pub const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];

pub const WEEKDAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

pub const CURRENCY_WORDS: &[&str] = &[
    "rupees", "rupee", "rs", "rs.", "inr", "usd", "dollars", "dollar", "euros", "euro",
    "pounds", "paise",
];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "₹", "£", "€"];

/// Titles whose following word is read as a PERSON name
pub const PERSON_TITLES: &[&str] = &[
    "mr", "mr.", "mrs", "mrs.", "ms", "ms.", "dr", "dr.", "shri", "smt",
];

/// Built-in gazetteer. Multi-word names are space separated.
const GAZETTEER: &[(&str, &str)] = &[
    // countries
    ("india", "GPE"), ("pakistan", "GPE"), ("nepal", "GPE"), ("bangladesh", "GPE"),
    ("sri lanka", "GPE"), ("china", "GPE"), ("japan", "GPE"), ("usa", "GPE"),
    ("uk", "GPE"), ("uae", "GPE"), ("dubai", "GPE"), ("qatar", "GPE"),
    ("oman", "GPE"), ("saudi arabia", "GPE"), ("united states", "GPE"),
    // states and union territories
    ("kerala", "GPE"), ("tamil nadu", "GPE"), ("karnataka", "GPE"), ("andhra pradesh", "GPE"),
    ("telangana", "GPE"), ("maharashtra", "GPE"), ("gujarat", "GPE"), ("assam", "GPE"),
    ("bihar", "GPE"), ("odisha", "GPE"), ("orissa", "GPE"), ("west bengal", "GPE"),
    ("uttarakhand", "GPE"), ("uttar pradesh", "GPE"), ("himachal pradesh", "GPE"),
    ("goa", "GPE"), ("puducherry", "GPE"), ("jammu", "GPE"), ("kashmir", "GPE"),
    // cities and districts
    ("delhi", "GPE"), ("new delhi", "GPE"), ("mumbai", "GPE"), ("chennai", "GPE"),
    ("kolkata", "GPE"), ("bangalore", "GPE"), ("bengaluru", "GPE"), ("hyderabad", "GPE"),
    ("kochi", "GPE"), ("cochin", "GPE"), ("ernakulam", "GPE"), ("aluva", "GPE"),
    ("thrissur", "GPE"), ("alappuzha", "GPE"), ("alleppey", "GPE"), ("pathanamthitta", "GPE"),
    ("kottayam", "GPE"), ("idukki", "GPE"), ("wayanad", "GPE"), ("kozhikode", "GPE"),
    ("calicut", "GPE"), ("malappuram", "GPE"), ("palakkad", "GPE"), ("kannur", "GPE"),
    ("kollam", "GPE"), ("trivandrum", "GPE"), ("thiruvananthapuram", "GPE"),
    ("chengannur", "GPE"), ("pandanad", "GPE"), ("ranni", "GPE"), ("kuttanad", "GPE"),
    ("chalakudy", "GPE"), ("angamaly", "GPE"), ("perumbavoor", "GPE"), ("paravur", "GPE"),
    ("north paravur", "GPE"), ("tiruvalla", "GPE"), ("mangalore", "GPE"), ("coorg", "GPE"),
    ("madurai", "GPE"), ("coimbatore", "GPE"), ("pune", "GPE"), ("patna", "GPE"),
    ("guwahati", "GPE"),
    // nationalities and groups
    ("indian", "NORP"), ("indians", "NORP"), ("keralite", "NORP"), ("keralites", "NORP"),
    ("malayali", "NORP"), ("malayalis", "NORP"), ("tamil", "NORP"), ("american", "NORP"),
    ("british", "NORP"), ("hindu", "NORP"), ("muslim", "NORP"), ("christian", "NORP"),
    // organisations
    ("ndrf", "ORG"), ("sdrf", "ORG"), ("ndma", "ORG"), ("unicef", "ORG"), ("red cross", "ORG"),
    ("indian army", "ORG"), ("indian navy", "ORG"), ("indian air force", "ORG"),
    ("air force", "ORG"), ("coast guard", "ORG"), ("navy", "ORG"), ("army", "ORG"),
    ("iaf", "ORG"), ("kseb", "ORG"), ("ksrtc", "ORG"), ("cmdrf", "ORG"), ("bsnl", "ORG"),
    ("twitter", "ORG"), ("facebook", "ORG"), ("whatsapp", "ORG"),
];

fn set_of(words: &[&'static str]) -> FxHashSet<&'static str> {
    words.iter().copied().collect()
}

fn closed_class_map() -> &'static FxHashMap<&'static str, PosTag> {
    static MAP: OnceLock<FxHashMap<&'static str, PosTag>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut map = FxHashMap::default();
        // Later inserts lose to earlier ones: the first list that
        // claims a word decides its tag ("that" stays DET, "not"
        // stays PART, "so" stays SCONJ).
        let lists: [(&[&'static str], PosTag); 9] = [
            (PARTICLES, PosTag::Particle),
            (AUXILIARIES, PosTag::Auxiliary),
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (COORD_CONJ, PosTag::CoordConj),
            (SUBORD_CONJ, PosTag::SubordConj),
            (ADPOSITIONS, PosTag::Adposition),
            (INTERJECTIONS, PosTag::Interjection),
            (ADVERBS, PosTag::Adverb),
        ];
        for (words, tag) in lists {
            for w in words {
                map.entry(*w).or_insert(tag);
            }
        }
        map
    })
}

/// Tag of a closed-class word, if it is one
pub fn closed_class(lower: &str) -> Option<PosTag> {
    closed_class_map().get(lower).copied()
}

pub fn is_known_verb(lower: &str) -> bool {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| set_of(VERBS)).contains(lower)
}

pub fn is_number_word(lower: &str) -> bool {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| set_of(NUMBER_WORDS)).contains(lower)
}

pub fn is_ordinal_word(lower: &str) -> bool {
    ORDINAL_WORDS.contains(&lower)
}

pub fn is_modal_or_aux(lower: &str) -> bool {
    AUXILIARIES.contains(&lower)
}

/// Morphological guess for a purely alphabetic word not found
/// in any list. Short words are too ambiguous and stay NOUN.
pub fn suffix_guess(lower: &str) -> PosTag {
    let n = lower.chars().count();
    if n <= 3 {
        return PosTag::Noun;
    }
    if lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if lower.ends_with("ing") || lower.ends_with("ed") {
        return PosTag::Verb;
    }
    const ADJ_SUFFIXES: &[&str] = &[
        "ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "ical", "al",
    ];
    // -al also ends plenty of nouns (hospital, signal, animal)
    const AL_NOUNS: &[&str] = &["hospital", "signal", "animal", "capital", "arrival", "festival"];
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) && !AL_NOUNS.contains(&lower) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

/// Built-in (name, label) gazetteer entries
pub fn default_gazetteer() -> impl Iterator<Item = (&'static str, &'static str)> {
    GAZETTEER.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_lookup() {
        assert_eq!(closed_class("the"), Some(PosTag::Determiner));
        assert_eq!(closed_class("we"), Some(PosTag::Pronoun));
        assert_eq!(closed_class("in"), Some(PosTag::Adposition));
        assert_eq!(closed_class("and"), Some(PosTag::CoordConj));
        assert_eq!(closed_class("because"), Some(PosTag::SubordConj));
        assert_eq!(closed_class("are"), Some(PosTag::Auxiliary));
        assert_eq!(closed_class("please"), Some(PosTag::Interjection));
        assert_eq!(closed_class("boat"), None);
    }

    #[test]
    fn test_first_list_wins() {
        // "not" is in both PARTICLES and ADVERBS
        assert_eq!(closed_class("not"), Some(PosTag::Particle));
        assert_eq!(closed_class("to"), Some(PosTag::Particle));
    }

    #[test]
    fn test_suffix_guess() {
        assert_eq!(suffix_guess("quickly"), PosTag::Adverb);
        assert_eq!(suffix_guess("floating"), PosTag::Verb);
        assert_eq!(suffix_guess("marooned"), PosTag::Verb);
        assert_eq!(suffix_guess("dangerous"), PosTag::Adjective);
        assert_eq!(suffix_guess("medical"), PosTag::Adjective);
        assert_eq!(suffix_guess("hospital"), PosTag::Noun);
        assert_eq!(suffix_guess("water"), PosTag::Noun);
        assert_eq!(suffix_guess("bed"), PosTag::Noun);
    }

    #[test]
    fn test_word_lists() {
        assert!(is_known_verb("trapped"));
        assert!(is_number_word("lakh"));
        assert!(is_ordinal_word("third"));
        assert!(is_modal_or_aux("can"));
        assert!(default_gazetteer().any(|(name, label)| name == "kerala" && label == "GPE"));
    }
}
