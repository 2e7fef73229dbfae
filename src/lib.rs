//! # versedb
//!
//! A self-contained, in-memory information-retrieval engine for a corpus of
//! short documents (poetry lines, but domain-agnostic). Documents are
//! tokenized, normalized through Porter stemming or dictionary
//! lemmatization, and placed into an inverted index; queries come back as
//! Boolean expressions over normalized terms or as ranked TF-IDF top-K
//! results. Original text is optionally stored LZW-compressed.
//!
//! This is a core library crate with zero async dependencies — no I/O, no
//! server surface, suitable for embedding directly.
//!
//! ## Architecture
//!
//! ```text
//! ingest:  raw text → Tokenizer → Pipeline (case-fold → stem/lemma) → Index
//!          raw text → LZW → document store            (per options)
//! query:   text → Pipeline → TF-IDF ranker → top-K (doc id, score)
//!          expression → shunting-yard → RPN → posting-list algebra → doc ids
//! ```

/// Global configuration constants: codec parameters, defaults, and limits.
pub mod config;
/// Inverted index with per-document term-frequency bookkeeping.
pub mod index;
/// LZW byte-stream codec for stored document text.
pub mod lzw;
/// Query engines: Boolean set algebra and TF-IDF ranking.
pub mod search;
/// Corpus frequency statistics and Zipf-law analysis.
pub mod stats;
/// Database facade and document/title storage.
pub mod storage;
/// Text processing: tokenizer, stemmer, lemmatizer, pipeline.
pub mod text;

pub use index::{DocId, InvertedIndex};
pub use search::SearchResult;
pub use storage::{Database, DatabaseOptions};
pub use text::{Pipeline, PipelineOptions};
