// ============================================================
// Layer 6 — Table Rendering
// ============================================================
// Prints label / count tables and token tables as plain ASCII
// grids:
//
//   +------+-------+
//   | POS  | Count |
//   +------+-------+
//   | NOUN | 12    |
//   +------+-------+
//
// Reference: tabled crate documentation

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

use crate::domain::annotation::Doc;
use crate::domain::frequency::FrequencyTable;

/// Collects a header and rows, then renders them with tabled.
#[derive(Debug, Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(&self) -> String {
        let mut data: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        data.push(self.headers.clone());
        data.extend(self.rows.iter().cloned());

        Table::from_iter(data)
            .with(Style::ascii())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}

/// `label | Count` table, most common first
pub fn frequency_table(label_header: &str, table: &FrequencyTable) -> String {
    let mut builder = TableBuilder::new(&[label_header, "Count"]);
    for (label, count) in table.most_common() {
        builder.add_row(vec![label.to_string(), count.to_string()]);
    }
    builder.build()
}

/// One row per non-space token: text, POS tag, entity label
pub fn token_table(doc: &Doc) -> String {
    let mut builder = TableBuilder::new(&["Text", "POS", "Entity"]);
    for (i, tok) in doc.tokens.iter().enumerate().filter(|(_, t)| !t.is_space) {
        builder.add_row(vec![
            tok.text.clone(),
            tok.pos.to_string(),
            doc.entity_label_at(i).unwrap_or("").to_string(),
        ]);
    }
    builder.build()
}

/// One row per entity span
pub fn entity_table(doc: &Doc) -> String {
    let mut builder = TableBuilder::new(&["Entity", "Label"]);
    for ent in &doc.ents {
        builder.add_row(vec![ent.text.clone(), ent.label.clone()]);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_rows_in_count_order() {
        let table: FrequencyTable = ["VERB", "NOUN", "NOUN"].iter().collect();
        let out = frequency_table("POS", &table);

        assert!(out.starts_with('+'));
        assert!(out.contains("POS"));
        assert!(out.contains("Count"));
        let noun = out.find("NOUN").unwrap();
        let verb = out.find("VERB").unwrap();
        assert!(noun < verb);
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = frequency_table("NER", &FrequencyTable::new());
        assert!(out.contains("NER"));
        // top border, header, bottom border
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_token_and_entity_tables() {
        use crate::domain::traits::Annotator;
        use crate::nlp::pipeline::Pipeline;
        use crate::nlp::ruler::EntityPattern;

        let nlp = Pipeline::english(&[EntityPattern::masked_person()], &[]).unwrap();
        let doc = nlp.annotate("A***B  trapped");
        let tokens = token_table(&doc);
        assert!(tokens.contains("PERSON"));
        assert!(!tokens.contains("SPACE"));
        // border + header + border + 2 rows each followed by a border
        assert_eq!(tokens.lines().count(), 7);

        let ents = entity_table(&doc);
        assert!(ents.contains("A***B"));
    }

    #[test]
    fn test_builder_counts_rows() {
        let mut b = TableBuilder::new(&["Text", "POS"]);
        assert!(b.is_empty());
        b.add_row(vec!["help".to_string(), "NOUN".to_string()]);
        assert_eq!(b.len(), 1);
        assert!(b.build().contains("help"));
    }
}
