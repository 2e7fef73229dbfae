//! TF-IDF scoring and top-K retrieval.
//!
//! `tf(d, t)` is the term frequency normalized by document length;
//! `idf(t) = ln((N + 1) / (df + 1)) + 1`, a smoothed form that keeps every
//! observed term's weight finite and non-negative. A document's score for a
//! query is the sum of `tf * idf` over the query terms (with multiplicity).

use crate::index::{DocId, InvertedIndex};
use crate::search::types::SearchResult;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashSet;

/// Normalized term frequency of `term` in `doc_id`; zero for an empty or
/// unknown document.
pub fn tf(index: &InvertedIndex, doc_id: DocId, term: &str) -> f64 {
    let doc_len = index.document_length(doc_id);
    if doc_len == 0 {
        return 0.0;
    }
    index.term_frequency(doc_id, term) as f64 / doc_len as f64
}

/// Smoothed inverse document frequency; zero when the index is empty or the
/// term is unknown.
pub fn idf(index: &InvertedIndex, term: &str) -> f64 {
    let n = index.document_count();
    let df = index.document_frequency(term);
    if n == 0 || df == 0 {
        return 0.0;
    }
    ((n as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
}

/// TF-IDF weight of `term` in `doc_id`.
pub fn tfidf(index: &InvertedIndex, doc_id: DocId, term: &str) -> f64 {
    tf(index, doc_id, term) * idf(index, term)
}

/// Score of a document against the query terms, used with multiplicity.
pub fn document_score<S: AsRef<str>>(index: &InvertedIndex, doc_id: DocId, query_terms: &[S]) -> f64 {
    query_terms
        .iter()
        .map(|term| tfidf(index, doc_id, term.as_ref()))
        .sum()
}

/// IDF weight per query term, in query order.
pub fn term_weights<S: AsRef<str>>(index: &InvertedIndex, terms: &[S]) -> Vec<f64> {
    terms.iter().map(|t| idf(index, t.as_ref())).collect()
}

/// Candidate set for a query: the union of the query terms' posting lists,
/// in ascending id order.
pub fn candidates<S: AsRef<str>>(index: &InvertedIndex, query_terms: &[S]) -> Vec<DocId> {
    let mut set: HashSet<DocId> = HashSet::new();
    for term in query_terms {
        set.extend(index.posting_list(term.as_ref()));
    }
    let mut ids: Vec<DocId> = set.into_iter().collect();
    ids.sort_unstable();
    ids
}

/// Returns the `top_k` best-scoring documents for the query terms, ordered
/// by descending score with ties broken by ascending id. Candidates with a
/// score of zero are discarded; `top_k` may exceed the candidate count.
pub fn tfidf_search<S: AsRef<str>>(
    index: &InvertedIndex,
    query_terms: &[S],
    top_k: usize,
) -> Vec<SearchResult> {
    if query_terms.is_empty() {
        return Vec::new();
    }

    // Partial selection: O(n log k) via a bounded min-heap. Among equal
    // scores the largest id is evicted first, so the smallest ids survive.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, Reverse<DocId>)>> =
        BinaryHeap::with_capacity(top_k + 1);
    for doc_id in candidates(index, query_terms) {
        let score = document_score(index, doc_id, query_terms);
        if score <= 0.0 {
            continue;
        }
        heap.push(Reverse((OrderedFloat(score), Reverse(doc_id))));
        if heap.len() > top_k {
            heap.pop();
        }
    }

    let mut results: Vec<SearchResult> = heap
        .into_iter()
        .map(|Reverse((score, Reverse(doc_id)))| SearchResult {
            doc_id,
            score: score.0,
        })
        .collect();
    results.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    results
}
