//! Query engines: Boolean set algebra over posting lists and TF-IDF
//! ranked retrieval.

/// Boolean expressions: set primitives, shunting-yard parsing, evaluation.
pub mod boolean;
/// TF-IDF scoring, candidate selection, and top-K ordering.
pub mod tfidf;
/// Scored result types.
pub mod types;

pub use boolean::{
    boolean_query, complement, intersect, search_and, search_and_not, search_or, union,
};
pub use tfidf::tfidf_search;
pub use types::SearchResult;
