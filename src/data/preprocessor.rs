// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises a raw spreadsheet cell before tokenisation.
//
// Exported tweets often contain:
//   - Non-breaking spaces (U+00A0) and tabs from copy-pasting
//   - Zero-width spaces (U+200B) and byte order marks (U+FEFF)
//   - Windows line endings (\r\n) inside multi-line cells
//
// Cleaning steps (applied in order):
//   1. Tab / non-breaking space → plain space
//   2. Zero-width space / BOM   → removed
//   3. \r\n and lone \r         → \n
//   4. Trim both ends
//
// Inner runs of whitespace are left alone on purpose: the
// tokenizer turns them into SPACE tokens, which the cleaner
// then drops.
//
// Other control characters are NOT touched — stray bytes like
// U+008F are part of the mojibake the stop-word list targets.
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    /// Create a new Preprocessor instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw cell string. Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\t' | '\u{00A0}' => out.push(' '),
                '\u{200B}' | '\u{FEFF}' => {}
                '\r' => {
                    // \r\n collapses to a single \n
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push('\n');
                }
                c => out.push(c),
            }
        }

        out.trim().to_string()
    }
}

/// Implement Default so Preprocessor can be created with Preprocessor::default()
impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("  need help  "), "need help");
    }

    #[test]
    fn test_normalises_special_spaces() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("need\u{00A0}boat\tnow"), "need boat now");
        assert_eq!(p.clean("\u{FEFF}sos\u{200B}"), "sos");
    }

    #[test]
    fn test_line_endings() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("line1\r\nline2\rline3"), "line1\nline2\nline3");
    }

    #[test]
    fn test_keeps_inner_whitespace_runs() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("a   b"), "a   b");
    }

    #[test]
    fn test_keeps_mojibake_bytes() {
        let p = Preprocessor::new();
        assert_eq!(p.clean("help\u{8f}"), "help\u{8f}");
    }

    #[test]
    fn test_empty_string() {
        let p = Preprocessor::new();
        assert_eq!(p.clean(""), "");
    }
}
