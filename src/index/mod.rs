//! Inverted index: the append-only data structure anchoring all retrieval.

/// Inverted index with term-frequency bookkeeping.
pub mod inverted;

/// Dense internal document id, assigned sequentially at ingest.
pub type DocId = u32;

pub use inverted::InvertedIndex;
