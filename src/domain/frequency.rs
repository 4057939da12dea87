// ============================================================
// Layer 3 — Frequency Table
// ============================================================
// A label → count tally built in one pass over annotations.
//
// Ordering contract for most_common():
//   - higher counts first
//   - equal counts keep the order labels were FIRST seen
//
// Insertion order is tracked explicitly (a Vec of entries plus
// an index map) rather than relying on hash iteration order,
// which is unspecified.
//
// Reference: Rust Book §8 (Hash Maps)

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// (label, count) in first-seen order
    entries: Vec<(String, usize)>,
    /// label → position in `entries`
    index: FxHashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one observation of `label`
    pub fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    /// Count every label yielded by the iterator
    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add(label.as_ref());
        }
    }

    /// Count for `label`, zero if never seen
    pub fn get(&self, label: &str) -> usize {
        self.index.get(label).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Sum of all counts == number of observations
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending count; ties keep first-seen order.
    /// `sort_by` is stable, which is what preserves the tie order.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

/// Serialises as an ordered list of `{ "label": ..., "count": ... }`
/// so JSON output keeps the same order as the printed tables.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Row<'a> {
            label: &'a str,
            count: usize,
        }
        serializer.collect_seq(
            self.most_common()
                .into_iter()
                .map(|(label, count)| Row { label, count }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_observations() {
        let labels = ["NOUN", "VERB", "NOUN", "ADJ", "NOUN", "VERB"];
        let table: FrequencyTable = labels.iter().collect();
        assert_eq!(table.total(), labels.len());
        assert_eq!(table.get("NOUN"), 3);
        assert_eq!(table.get("PRON"), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_most_common_orders_by_count() {
        let table: FrequencyTable = ["a", "b", "b", "c", "c", "c"].iter().collect();
        let rows = table.most_common();
        assert_eq!(rows, vec![("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table: FrequencyTable = ["GPE", "DATE", "PERSON", "DATE", "GPE", "PERSON"]
            .iter()
            .collect();
        let labels: Vec<&str> = table.most_common().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["GPE", "DATE", "PERSON"]);
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.most_common().is_empty());
    }

    #[test]
    fn test_serialises_in_table_order() {
        let table: FrequencyTable = ["x", "y", "y"].iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"label":"y","count":2},{"label":"x","count":1}]"#);
    }
}
