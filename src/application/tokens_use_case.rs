// ============================================================
// Layer 2 — Tokens Use Case
// ============================================================
// Exposes the intermediate token lists of a report run, one
// entry per message:
//
//   Raw     — every pass-1 token text, whitespace included
//   Cleaned — the tokens that survive cleaning, as fed to pass 2
//
// Reference: Clean Architecture (use-case interactor)

use anyhow::Result;
use serde::Serialize;

use crate::application::config::AnalysisConfig;
use crate::data::cleaner::TokenCleaner;
use crate::data::preprocessor::Preprocessor;
use crate::domain::traits::MessageSource;
use crate::nlp::pipeline::Pipeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenView {
    Raw,
    Cleaned,
}

/// One message's tokens, serialised as one JSON line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenizedMessage {
    pub row: usize,
    pub tokens: Vec<String>,
}

pub struct TokensUseCase {
    config: AnalysisConfig,
    view: TokenView,
}

impl TokensUseCase {
    pub fn new(config: AnalysisConfig, view: TokenView) -> Self {
        Self { config, view }
    }

    pub fn execute(&self) -> Result<Vec<TokenizedMessage>> {
        let loader = self.config.loader();
        self.run(&loader)
    }

    pub fn run(&self, source: &dyn MessageSource) -> Result<Vec<TokenizedMessage>> {
        let messages = source.load_all()?;
        let nlp = Pipeline::english(&self.config.entity_patterns, &self.config.gazetteer)?;
        let cleaner = TokenCleaner::new(self.config.stopwords());
        let preprocessor = Preprocessor::new();

        let texts: Vec<String> = messages.iter().map(|m| preprocessor.clean(&m.text)).collect();
        let out: Vec<TokenizedMessage> = messages
            .iter()
            .zip(nlp.pipe(&texts))
            .map(|(m, doc)| {
                let tokens = match self.view {
                    TokenView::Raw => doc.tokens.iter().map(|t| t.text.clone()).collect(),
                    TokenView::Cleaned => cleaner.clean_doc(&doc),
                };
                TokenizedMessage { row: m.row, tokens }
            })
            .collect();

        tracing::info!("Tokenised {} messages ({:?})", out.len(), self.view);
        Ok(out)
    }
}
