//! Scored result types for ranked queries.

use crate::index::DocId;
use serde::{Deserialize, Serialize};

/// A document id with its TF-IDF relevance score.
///
/// Scores are finite and non-negative. Result lists are ordered by
/// descending score, ties broken by ascending document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}
