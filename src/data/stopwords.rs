// ============================================================
// Layer 4 — Stop-word Filter
// ============================================================
// Case-insensitive stop-word set. English uses spaCy's fixed
// STOP_WORDS list, embedded below; other languages come from
// the `stop-words` crate.
//
// MESSAGE_DEBRIS (the mojibake and symbol leftovers seen in the
// SOS data) is added by AnalysisConfig::stopwords on every run.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// spaCy's English STOP_WORDS, contraction pieces included
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "amount",
    "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at",
    "back", "be", "became", "because", "become", "becomes", "becoming", "been", "before",
    "beforehand", "behind", "being", "below", "beside", "besides", "between", "beyond", "both",
    "bottom", "but", "by",
    "call", "can", "cannot", "ca", "could",
    "did", "do", "does", "doing", "done", "down", "due", "during",
    "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except",
    "few", "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty", "four",
    "from", "front", "full", "further",
    "get", "give", "go",
    "had", "has", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "if", "in", "indeed", "into", "is", "it", "its", "itself",
    "just", "keep",
    "last", "latter", "latterly", "least", "less",
    "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "move", "much", "must", "my", "myself",
    "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none",
    "noone", "nor", "not", "nothing", "now", "nowhere",
    "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put",
    "quite",
    "rather", "re", "really", "regarding",
    "same", "say", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she",
    "should", "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence", "there",
    "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two",
    "under", "until", "up", "unless", "upon", "us", "used", "using",
    "various", "very", "via",
    "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within",
    "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
    "n't", "'d", "'ll", "'m", "'re", "'s", "'ve",
    "n‘t", "‘d", "‘ll", "‘m", "‘re", "‘s", "‘ve",
    "n’t", "’d", "’ll", "’m", "’re", "’s", "’ve",
];

/// Encoding debris and stray symbols found in the exported tweets
pub const MESSAGE_DEBRIS: &[&str] = &[
    "help\u{f0}\u{ff}",
    "\u{2122}",
    "\u{8f}\u{f0}\u{ff}",
    "\u{8f}",
    "\u{f0}\u{ff}",
    "+",
    "@",
    "#",
    "*",
    "a+",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    pub fn new(language: &str) -> Self {
        match Self::language(language) {
            Some(lang) => Self {
                stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
            },
            None => Self::from_list(ENGLISH_STOPWORDS),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Map a language code to the crate's list; None picks the
    /// embedded English list
    fn language(language: &str) -> Option<LANGUAGE> {
        match language.to_lowercase().as_str() {
            "de" | "german" => Some(LANGUAGE::German),
            "fr" | "french" => Some(LANGUAGE::French),
            "es" | "spanish" => Some(LANGUAGE::Spanish),
            "it" | "italian" => Some(LANGUAGE::Italian),
            "pt" | "portuguese" => Some(LANGUAGE::Portuguese),
            "nl" | "dutch" => Some(LANGUAGE::Dutch),
            // Default to English for "en" and unknown languages
            _ => None,
        }
    }
}
