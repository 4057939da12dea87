// ============================================================
// Layer 2 — Annotate Use Case
// ============================================================
// Runs one ad-hoc text through the same preprocessing and
// pipeline a report uses, so rules can be checked without a
// spreadsheet.

use anyhow::Result;

use crate::application::config::AnalysisConfig;
use crate::data::preprocessor::Preprocessor;
use crate::domain::annotation::Doc;
use crate::domain::traits::Annotator;
use crate::nlp::pipeline::Pipeline;

pub struct AnnotateUseCase {
    nlp: Pipeline,
    preprocessor: Preprocessor,
}

impl AnnotateUseCase {
    /// Build the pipeline once; `annotate` can then be called many times
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            nlp: Pipeline::english(&config.entity_patterns, &config.gazetteer)?,
            preprocessor: Preprocessor::new(),
        })
    }

    pub fn annotate(&self, text: &str) -> Doc {
        let doc = self.nlp.annotate(&self.preprocessor.clean(text));
        tracing::info!("Annotated {} tokens, {} entities", doc.len(), doc.ents.len());
        doc
    }
}
