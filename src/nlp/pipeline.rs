// ============================================================
// Layer 5 — Pipeline
// ============================================================
// Owns the tokenizer plus an ordered list of components and
// implements the domain Annotator trait over them.

use anyhow::Result;

use crate::domain::annotation::Doc;
use crate::domain::traits::{Annotator, PipelineComponent};
use crate::nlp::recognizer::{EntityRecognizer, Gazetteer, GazetteerEntry};
use crate::nlp::ruler::{EntityPattern, EntityRuler};
use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::Tokenizer;

pub struct Pipeline {
    tokenizer: Tokenizer,
    components: Vec<Box<dyn PipelineComponent>>,
}

impl Pipeline {
    /// A pipeline with only a tokenizer; add components with `add_pipe`
    pub fn blank() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            components: Vec::new(),
        }
    }

    /// tokenizer → tagger → entity_ruler → ner
    ///
    /// `patterns` feed the entity ruler; `gazetteer` entries are
    /// added on top of the built-in GPE / NORP / ORG names.
    pub fn english(patterns: &[EntityPattern], gazetteer: &[GazetteerEntry]) -> Result<Self> {
        let ruler = EntityRuler::new(patterns)?;
        let mut names = Gazetteer::builtin();
        names.extend(gazetteer);

        tracing::debug!(
            "Building pipeline: {} ruler patterns, {} gazetteer names",
            ruler.len(),
            names.len()
        );

        let mut nlp = Self::blank();
        nlp.add_pipe(Box::new(PosTagger::new()));
        nlp.add_pipe(Box::new(ruler));
        nlp.add_pipe(Box::new(EntityRecognizer::new(names)));
        tracing::debug!("Pipeline components: {:?}", nlp.pipe_names());
        Ok(nlp)
    }

    pub fn add_pipe(&mut self, component: Box<dyn PipelineComponent>) {
        self.components.push(component);
    }

    /// Component names in run order
    pub fn pipe_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    /// Annotate many texts lazily, in order
    pub fn pipe<'a>(&'a self, texts: &'a [String]) -> impl Iterator<Item = Doc> + 'a {
        texts.iter().map(move |t| self.annotate(t))
    }
}

impl Annotator for Pipeline {
    fn annotate(&self, text: &str) -> Doc {
        let mut doc = Doc::new(text, self.tokenizer.tokenize(text));
        for component in &self.components {
            component.process(&mut doc);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nlp() -> Pipeline {
        Pipeline::english(&[EntityPattern::masked_person()], &[]).unwrap()
    }

    #[test]
    fn test_component_order() {
        assert_eq!(nlp().pipe_names(), vec!["tagger", "entity_ruler", "ner"]);
    }

    #[test]
    fn test_blank_pipeline_only_tokenizes() {
        let doc = Pipeline::blank().annotate("A***B in kerala");
        assert_eq!(doc.len(), 3);
        assert!(doc.ents.is_empty());
    }

    #[test]
    fn test_masked_name_and_place() {
        let doc = nlp().annotate("a***b stuck in chengannur since 2 days");
        let got: Vec<(&str, &str)> = doc
            .ents
            .iter()
            .map(|e| (e.text.as_str(), e.label.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![("a***b", "PERSON"), ("chengannur", "GPE"), ("2 days", "DATE")]
        );
    }

    #[test]
    fn test_ruler_wins_over_gazetteer() {
        let nlp = Pipeline::english(&[EntityPattern::new("FAC", &["^aluva$"])], &[]).unwrap();
        let doc = nlp.annotate("aluva");
        assert_eq!(doc.ents[0].label, "FAC");
    }

    #[test]
    fn test_user_gazetteer_entries() {
        let extra = [GazetteerEntry {
            label: "FAC".to_string(),
            name: "St Marys School".to_string(),
        }];
        let nlp = Pipeline::english(&[], &extra).unwrap();
        let doc = nlp.annotate("camp at st marys school");
        assert_eq!(doc.ents.len(), 1);
        assert_eq!(doc.ents[0].text, "st marys school");
    }

    #[test]
    fn test_pipe_preserves_order() {
        let texts = vec!["help".to_string(), "kerala".to_string()];
        let nlp = nlp();
        let docs: Vec<Doc> = nlp.pipe(&texts).collect();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].text, "kerala");
    }
}
