//! Append-only inverted index with per-document term-frequency bookkeeping.
//!
//! Maps terms to posting lists of dense internal document ids. Because ids
//! are assigned sequentially, per-document data (lengths, term-frequency
//! maps, stored text, titles) lives in flat `Vec`s indexed by id, and
//! posting lists stay strictly increasing by construction.

use crate::index::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inverted index mapping terms to posting lists.
///
/// The index never fails: unknown terms and unknown doc ids yield neutral
/// values (empty list, zero, absent). Append never rejects input, and the
/// only mutations are `append*`, `set_title`, and `clear`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    /// term → strictly increasing list of doc ids containing it
    postings: HashMap<String, Vec<DocId>>,
    /// doc id → term → occurrence count
    term_frequencies: Vec<HashMap<String, u32>>,
    /// doc id → total token count (duplicates included)
    doc_lengths: Vec<u32>,
    /// Sum of all document lengths (for average calculation)
    total_doc_length: u64,
    /// doc id → original text, when stored
    originals: HashMap<DocId, String>,
    /// doc id → title, when stored
    titles: HashMap<DocId, String>,
}

impl InvertedIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document given its ordered sequence of normalized terms
    /// (duplicates allowed) and returns the newly allocated id.
    pub fn append<S: AsRef<str>>(&mut self, terms: &[S]) -> DocId {
        let doc_id = self.doc_lengths.len() as DocId;
        let mut tf_map: HashMap<String, u32> = HashMap::new();

        for term in terms {
            let term = term.as_ref();
            *tf_map.entry(term.to_string()).or_insert(0) += 1;
        }
        for term in tf_map.keys() {
            // Ids are monotonic, so pushing keeps the list sorted.
            self.postings.entry(term.clone()).or_default().push(doc_id);
        }

        self.doc_lengths.push(terms.len() as u32);
        self.total_doc_length += terms.len() as u64;
        self.term_frequencies.push(tf_map);
        doc_id
    }

    /// As [`append`](Self::append), additionally storing the original text
    /// verbatim.
    pub fn append_with_text<S: AsRef<str>>(&mut self, terms: &[S], text: &str) -> DocId {
        let doc_id = self.append(terms);
        self.originals.insert(doc_id, text.to_string());
        doc_id
    }

    /// Stores a title for an existing document id.
    pub fn set_title(&mut self, doc_id: DocId, title: &str) {
        self.titles.insert(doc_id, title.to_string());
    }

    /// Returns the posting list for a term, empty if the term is unknown.
    pub fn posting_list(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the term occurs in at least one document.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of documents containing the term.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.posting_list(term).len()
    }

    /// Occurrence count of `term` in `doc_id`; zero if either is unknown.
    pub fn term_frequency(&self, doc_id: DocId, term: &str) -> usize {
        self.term_frequencies
            .get(doc_id as usize)
            .and_then(|tf| tf.get(term))
            .map(|&n| n as usize)
            .unwrap_or(0)
    }

    /// Total token count of the document; zero if the id is unknown.
    pub fn document_length(&self, doc_id: DocId) -> usize {
        self.doc_lengths
            .get(doc_id as usize)
            .map(|&n| n as usize)
            .unwrap_or(0)
    }

    /// Number of documents ever appended; also the next id to be allocated.
    pub fn document_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of distinct terms observed.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Mean token count per document; zero on an empty index.
    pub fn average_document_length(&self) -> f64 {
        if self.doc_lengths.is_empty() {
            return 0.0;
        }
        self.total_doc_length as f64 / self.doc_lengths.len() as f64
    }

    /// Returns the stored original text, if any.
    pub fn original_text(&self, doc_id: DocId) -> Option<&str> {
        self.originals.get(&doc_id).map(String::as_str)
    }

    /// Returns the stored title, if any.
    pub fn title(&self, doc_id: DocId) -> Option<&str> {
        self.titles.get(&doc_id).map(String::as_str)
    }

    /// Iterates over all distinct terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Drops every document and term and resets the id counter to zero.
    pub fn clear(&mut self) {
        self.postings.clear();
        self.term_frequencies.clear();
        self.doc_lengths.clear();
        self.total_doc_length = 0;
        self.originals.clear();
        self.titles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_dense_ids() {
        let mut idx = InvertedIndex::new();
        assert_eq!(idx.append(&["red", "apple"]), 0);
        assert_eq!(idx.append(&["green", "apple"]), 1);
        assert_eq!(idx.append(&["red", "banana"]), 2);
        assert_eq!(idx.document_count(), 3);
    }

    #[test]
    fn test_posting_lists_sorted_and_distinct() {
        let mut idx = InvertedIndex::new();
        idx.append(&["apple", "apple", "pear"]);
        idx.append(&["pear"]);
        idx.append(&["apple"]);
        assert_eq!(idx.posting_list("apple"), &[0, 2]);
        assert_eq!(idx.posting_list("pear"), &[0, 1]);
        assert!(idx.posting_list("plum").is_empty());
    }

    #[test]
    fn test_term_frequency_counts_duplicates() {
        let mut idx = InvertedIndex::new();
        idx.append(&["hello", "hello", "hello", "world"]);
        assert_eq!(idx.term_frequency(0, "hello"), 3);
        assert_eq!(idx.term_frequency(0, "world"), 1);
        assert_eq!(idx.term_frequency(0, "missing"), 0);
        assert_eq!(idx.term_frequency(9, "hello"), 0);
    }

    #[test]
    fn test_document_length_sums_frequencies() {
        let mut idx = InvertedIndex::new();
        idx.append(&["a", "b", "a", "c"]);
        assert_eq!(idx.document_length(0), 4);
        let total: usize = ["a", "b", "c"]
            .iter()
            .map(|t| idx.term_frequency(0, t))
            .sum();
        assert_eq!(total, idx.document_length(0));
    }

    #[test]
    fn test_document_frequency_matches_posting_list() {
        let mut idx = InvertedIndex::new();
        idx.append(&["x", "y"]);
        idx.append(&["x"]);
        assert_eq!(idx.document_frequency("x"), idx.posting_list("x").len());
        assert_eq!(idx.document_frequency("x"), 2);
        assert_eq!(idx.document_frequency("absent"), 0);
    }

    #[test]
    fn test_tf_positive_iff_posted() {
        let mut idx = InvertedIndex::new();
        idx.append(&["a", "b"]);
        idx.append(&["b", "c"]);
        for term in ["a", "b", "c"] {
            for doc in 0..idx.document_count() as DocId {
                let posted = idx.posting_list(term).contains(&doc);
                assert_eq!(idx.term_frequency(doc, term) > 0, posted);
            }
        }
    }

    #[test]
    fn test_average_document_length() {
        let mut idx = InvertedIndex::new();
        assert_eq!(idx.average_document_length(), 0.0);
        idx.append(&["a", "b"]);
        idx.append(&["c", "d", "e", "f"]);
        assert_eq!(idx.average_document_length(), 3.0);
    }

    #[test]
    fn test_empty_terms_document() {
        let mut idx = InvertedIndex::new();
        let id = idx.append::<&str>(&[]);
        assert_eq!(id, 0);
        assert_eq!(idx.document_length(id), 0);
        assert_eq!(idx.document_count(), 1);
    }

    #[test]
    fn test_original_text_and_title() {
        let mut idx = InvertedIndex::new();
        let id = idx.append_with_text(&["hello", "world"], "Hello, world!");
        idx.set_title(id, "greeting");
        assert_eq!(idx.original_text(id), Some("Hello, world!"));
        assert_eq!(idx.title(id), Some("greeting"));
        assert_eq!(idx.original_text(99), None);
        assert_eq!(idx.title(99), None);
    }

    #[test]
    fn test_term_count() {
        let mut idx = InvertedIndex::new();
        idx.append(&["a", "b", "a"]);
        idx.append(&["b", "c"]);
        assert_eq!(idx.term_count(), 3);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut idx = InvertedIndex::new();
        idx.append_with_text(&["a"], "a");
        idx.append(&["b"]);
        idx.clear();
        assert_eq!(idx.document_count(), 0);
        assert_eq!(idx.term_count(), 0);
        assert_eq!(idx.average_document_length(), 0.0);
        assert_eq!(idx.original_text(0), None);
        assert_eq!(idx.append(&["fresh"]), 0);
    }
}
