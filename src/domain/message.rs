// ============================================================
// Layer 3 — Message Domain Type
// ============================================================
// One free-text message (an SOS tweet) pulled out of the
// selected spreadsheet column.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A raw message loaded from a spreadsheet cell.
/// By the time a Message exists the cell has already been
/// converted to text and stripped of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// 1-based spreadsheet row the text came from —
    /// kept for traceability in debug logs
    pub row: usize,

    /// The message text before tokenisation
    pub text: String,
}

impl Message {
    /// Create a new Message.
    /// Uses impl Into<String> so callers can pass &str or String.
    ///
    /// Example:
    ///   let msg = Message::new(10, "Need boat near Aluva");
    pub fn new(row: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
        }
    }
}

