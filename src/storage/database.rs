//! Database facade: the single entry point for ingest and queries.
//!
//! A [`Database`] owns a text pipeline, an inverted index, and the optional
//! document/title storage. Original text is stored LZW-compressed or
//! verbatim per the options; titles are always plain. All state sits behind
//! an `RwLock`, so a handle clones cheaply and reads run concurrently.

use crate::index::{DocId, InvertedIndex};
use crate::lzw;
use crate::search::boolean::{self, boolean_query};
use crate::search::tfidf::tfidf_search;
use crate::search::SearchResult;
use crate::text::{Pipeline, PipelineOptions};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Database configuration, fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseOptions {
    /// Text-processing options shared by ingest and query normalization.
    pub pipeline: PipelineOptions,
    /// Keep original document text retrievable via [`Database::document`].
    pub store_documents: bool,
    /// Store original text LZW-compressed instead of verbatim.
    pub compress_documents: bool,
    /// Keep titles retrievable via [`Database::title`].
    pub store_titles: bool,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            pipeline: PipelineOptions::default(),
            store_documents: true,
            compress_documents: true,
            store_titles: true,
        }
    }
}

fn normalize_all<S: AsRef<str>>(pipeline: &Pipeline, terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| pipeline.normalize_term(t.as_ref()))
        .collect()
}

/// Internal state, protected by the facade's `RwLock`.
#[derive(Debug)]
pub struct DatabaseData {
    pub pipeline: Pipeline,
    pub index: InvertedIndex,
    /// doc id → LZW-compressed original text, when compression is on.
    pub compressed_docs: HashMap<DocId, Vec<u8>>,
}

/// In-memory document database: ingest, ranked search, Boolean queries,
/// and retrieval of stored text and titles.
///
/// Cloning a `Database` produces a new handle to the same shared state.
#[derive(Debug, Clone)]
pub struct Database {
    options: DatabaseOptions,
    pub data: Arc<RwLock<DatabaseData>>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new(DatabaseOptions::default())
    }
}

impl Database {
    /// Creates a database with the given options.
    pub fn new(options: DatabaseOptions) -> Self {
        let data = DatabaseData {
            pipeline: Pipeline::with_options(options.pipeline.clone()),
            index: InvertedIndex::new(),
            compressed_docs: HashMap::new(),
        };
        Self {
            options,
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Returns the options the database was created with.
    pub fn options(&self) -> &DatabaseOptions {
        &self.options
    }

    /// Ingests a document: normalizes its text through the pipeline,
    /// appends it to the index, and stores the original text and title per
    /// the options. Returns the new sequential id.
    pub fn add_document(&self, content: &str, title: Option<&str>) -> DocId {
        let mut data = self.data.write();
        let terms = data.pipeline.process(content);

        let doc_id = if self.options.store_documents && !self.options.compress_documents {
            data.index.append_with_text(&terms, content)
        } else {
            data.index.append(&terms)
        };
        if self.options.store_documents && self.options.compress_documents {
            data.compressed_docs
                .insert(doc_id, lzw::compress(content.as_bytes()));
        }
        if self.options.store_titles {
            if let Some(title) = title.filter(|t| !t.is_empty()) {
                data.index.set_title(doc_id, title);
            }
        }

        debug!(doc_id, terms = terms.len(), "indexed document");
        doc_id
    }

    /// Ranked TF-IDF search: returns up to `top_k` results ordered by
    /// descending score, ties broken by ascending id.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let data = self.data.read();
        let query_terms = data.pipeline.process(query);
        let results = tfidf_search(&data.index, &query_terms, top_k);
        debug!(query, hits = results.len(), "ranked search");
        results
    }

    /// Evaluates a Boolean expression (`and`/`or`/`not`, parentheses) and
    /// returns the matching ids in ascending order. Malformed expressions
    /// yield an empty list.
    pub fn boolean_query(&self, expression: &str) -> Vec<DocId> {
        let data = self.data.read();
        let result = boolean_query(&data.index, &data.pipeline, expression);
        debug!(expression, hits = result.len(), "boolean query");
        result
    }

    /// Documents containing every one of the given terms. Terms are run
    /// through the normalization chain first.
    pub fn boolean_and<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocId> {
        let data = self.data.read();
        let normalized = normalize_all(&data.pipeline, terms);
        boolean::search_and(&data.index, &normalized)
    }

    /// Documents containing at least one of the given terms, normalized.
    pub fn boolean_or<S: AsRef<str>>(&self, terms: &[S]) -> Vec<DocId> {
        let data = self.data.read();
        let normalized = normalize_all(&data.pipeline, terms);
        boolean::search_or(&data.index, &normalized)
    }

    /// Documents containing every `include` term and none of the `exclude`
    /// terms, all normalized.
    pub fn boolean_and_not<S: AsRef<str>>(&self, include: &[S], exclude: &[S]) -> Vec<DocId> {
        let data = self.data.read();
        let include = normalize_all(&data.pipeline, include);
        let exclude = normalize_all(&data.pipeline, exclude);
        boolean::search_and_not(&data.index, &include, &exclude)
    }

    /// Returns the stored original text, decompressing when needed.
    /// `None` when storage is off or the id is unknown.
    pub fn document(&self, doc_id: DocId) -> Option<String> {
        if !self.options.store_documents {
            return None;
        }
        let data = self.data.read();
        if self.options.compress_documents {
            let bytes = data.compressed_docs.get(&doc_id)?;
            Some(String::from_utf8_lossy(&lzw::decompress(bytes)).into_owned())
        } else {
            data.index.original_text(doc_id).map(str::to_string)
        }
    }

    /// Returns the stored title, or `None` when titles are off or absent.
    pub fn title(&self, doc_id: DocId) -> Option<String> {
        if !self.options.store_titles {
            return None;
        }
        self.data.read().index.title(doc_id).map(str::to_string)
    }

    /// Number of documents ingested.
    pub fn document_count(&self) -> usize {
        self.data.read().index.document_count()
    }

    /// Number of distinct terms observed.
    pub fn term_count(&self) -> usize {
        self.data.read().index.term_count()
    }

    /// Documents containing `term`. The term is taken in normalized form;
    /// callers holding raw query text should apply
    /// [`normalize_term`](Self::normalize_term) first.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.data.read().index.document_frequency(term)
    }

    /// Occurrences of a normalized `term` inside one document.
    pub fn term_frequency(&self, doc_id: DocId, term: &str) -> usize {
        self.data.read().index.term_frequency(doc_id, term)
    }

    /// Total token count of a document; zero for unknown ids.
    pub fn document_length(&self, doc_id: DocId) -> usize {
        self.data.read().index.document_length(doc_id)
    }

    /// Mean token count per document; zero on an empty database.
    pub fn average_document_length(&self) -> f64 {
        self.data.read().index.average_document_length()
    }

    /// Copy of the posting list for a normalized term, ascending.
    pub fn posting_list(&self, term: &str) -> Vec<DocId> {
        self.data.read().index.posting_list(term).to_vec()
    }

    /// Runs a single term through the database's normalization chain.
    pub fn normalize_term(&self, term: &str) -> String {
        self.data.read().pipeline.normalize_term(term)
    }

    /// Drops every document, term, and stored text, and resets the id
    /// counter to zero.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.index.clear();
        data.compressed_docs.clear();
        debug!("database cleared");
    }
}
