// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the system:
//
//   MessageSource     — where the raw texts come from
//                       (SpreadsheetLoader today)
//   Annotator         — text in, annotated Doc out
//                       (nlp::Pipeline today)
//
// plus PipelineComponent, the unit the Pipeline is built from.
// The application layer only sees these traits, so a different
// tokenizer, tagger or recognizer can be dropped in without
// touching the report workflow.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;

use crate::domain::annotation::Doc;
use crate::domain::message::Message;

// ─── MessageSource ────────────────────────────────────────────────────────────
/// Any component that can load messages from a source.
pub trait MessageSource {
    /// Load every usable message, in source order.
    fn load_all(&self) -> Result<Vec<Message>>;
}

// ─── Annotator ────────────────────────────────────────────────────────────────
/// Anything that turns raw text into a tokenized, tagged,
/// entity-labelled Doc.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Doc;
}

// ─── PipelineComponent ────────────────────────────────────────────────────────
/// One in-place processing step over an already tokenized Doc
/// (tagger, entity ruler, recognizer).
pub trait PipelineComponent {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Mutate the doc — write POS tags or add entity spans
    fn process(&self, doc: &mut Doc);
}
