//! Corpus frequency statistics and Zipf-law analysis.
//!
//! Zipf's law predicts that a word's frequency is inversely proportional to
//! its rank: `f(r) ≈ C / r^α` with `α ≈ 1`. The analyzer accumulates word
//! counts from raw text or individual words and fits the exponent by
//! least-squares regression in log-log space over the top ranks.

use crate::config::ZIPF_FIT_RANKS;
use crate::text::{Tokenizer, TokenizerOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One ranked row of the frequency table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: usize,
    /// 1-based rank by descending frequency.
    pub rank: usize,
    /// `C / rank^α` under the fitted parameters.
    pub expected_frequency: f64,
    /// Observed over expected frequency.
    pub ratio: f64,
}

/// Summary of a Zipf analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipfStats {
    pub total_words: usize,
    pub unique_words: usize,
    /// Fitted constant `C` (the top frequency).
    pub zipf_constant: f64,
    /// Fitted exponent `α` from log-log regression.
    pub zipf_exponent: f64,
    /// Log-log correlation between observed and expected frequencies.
    pub correlation: f64,
    pub top_words: Vec<WordFrequency>,
}

/// Accumulates word frequencies and fits a Zipf distribution.
#[derive(Debug, Default)]
pub struct ZipfAnalyzer {
    frequencies: HashMap<String, usize>,
    total_words: usize,
    tokenizer: Tokenizer,
}

impl ZipfAnalyzer {
    /// Creates an analyzer with a lowercase tokenizer that drops
    /// single-character tokens.
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
            total_words: 0,
            tokenizer: Tokenizer::with_options(TokenizerOptions {
                min_token_length: 2,
                ..TokenizerOptions::default()
            }),
        }
    }

    /// Tokenizes `text` and counts every word token.
    pub fn add_text(&mut self, text: &str) {
        for word in self.tokenizer.tokenize_to_strings(text) {
            *self.frequencies.entry(word).or_insert(0) += 1;
            self.total_words += 1;
        }
    }

    /// Counts a single word occurrence.
    pub fn add_word(&mut self, word: &str) {
        *self.frequencies.entry(word.to_string()).or_insert(0) += 1;
        self.total_words += 1;
    }

    /// Occurrence count for a word; zero if never seen.
    pub fn frequency(&self, word: &str) -> usize {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// Total word occurrences counted.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Distinct words counted.
    pub fn unique_words(&self) -> usize {
        self.frequencies.len()
    }

    /// Distinct words divided by total occurrences; zero on an empty corpus.
    pub fn type_token_ratio(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.frequencies.len() as f64 / self.total_words as f64
    }

    /// Forgets everything counted so far.
    pub fn clear(&mut self) {
        self.frequencies.clear();
        self.total_words = 0;
    }

    /// Returns the frequency table ordered by descending frequency, with
    /// 1-based ranks assigned. Equal frequencies are ordered alphabetically
    /// so ranks are deterministic.
    pub fn sorted_frequencies(&self) -> Vec<WordFrequency> {
        let mut rows: Vec<(&str, usize)> = self
            .frequencies
            .iter()
            .map(|(w, &f)| (w.as_str(), f))
            .collect();
        rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows.into_iter()
            .enumerate()
            .map(|(i, (word, frequency))| WordFrequency {
                word: word.to_string(),
                frequency,
                rank: i + 1,
                expected_frequency: 0.0,
                ratio: 0.0,
            })
            .collect()
    }

    /// Fits the Zipf parameters and returns the `top_n` ranked words with
    /// their expected frequencies and observed/expected ratios filled in.
    pub fn analyze(&self, top_n: usize) -> ZipfStats {
        let freqs = self.sorted_frequencies();

        let mut stats = ZipfStats {
            total_words: self.total_words,
            unique_words: self.frequencies.len(),
            zipf_constant: 0.0,
            zipf_exponent: 0.0,
            correlation: 0.0,
            top_words: Vec::new(),
        };
        if freqs.is_empty() {
            return stats;
        }

        stats.zipf_constant = freqs[0].frequency as f64;
        stats.zipf_exponent = estimate_exponent(&freqs);
        stats.correlation = correlation(&freqs, stats.zipf_constant, stats.zipf_exponent);

        for row in freqs.into_iter().take(top_n) {
            let expected = stats.zipf_constant / (row.rank as f64).powf(stats.zipf_exponent);
            let ratio = if expected > 0.0 {
                row.frequency as f64 / expected
            } else {
                0.0
            };
            stats.top_words.push(WordFrequency {
                expected_frequency: expected,
                ratio,
                ..row
            });
        }
        stats
    }
}

/// True when at least half of the top-20 rows sit within `1 ± tolerance`
/// of their Zipf-expected frequency. Needs at least 10 rows to judge.
pub fn verify_zipf_law(freqs: &[WordFrequency], tolerance: f64) -> bool {
    if freqs.len() < 10 {
        return false;
    }
    let valid = freqs
        .iter()
        .take(20)
        .filter(|wf| wf.ratio > 1.0 - tolerance && wf.ratio < 1.0 + tolerance)
        .count();
    valid >= freqs.len().min(20) / 2
}

/// Least-squares slope of log(frequency) against log(rank) over the top
/// ranks; the Zipf exponent is its negation.
fn estimate_exponent(freqs: &[WordFrequency]) -> f64 {
    if freqs.len() < 2 {
        return 1.0;
    }
    let n = freqs.len().min(ZIPF_FIT_RANKS);
    let (mut sum_xy, mut sum_x, mut sum_y, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for wf in &freqs[..n] {
        let x = (wf.rank as f64).ln();
        let y = (wf.frequency as f64).ln();
        sum_xy += x * y;
        sum_x += x;
        sum_y += y;
        sum_x2 += x * x;
    }
    let n = n as f64;
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return 1.0;
    }
    -((n * sum_xy - sum_x * sum_y) / denom)
}

/// Pearson correlation between log observed and log expected frequencies.
fn correlation(freqs: &[WordFrequency], c: f64, alpha: f64) -> f64 {
    if freqs.len() < 2 {
        return 0.0;
    }
    let n = freqs.len().min(ZIPF_FIT_RANKS);
    let (mut sum_xy, mut sum_x, mut sum_y, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for wf in &freqs[..n] {
        let x = (wf.frequency as f64).ln();
        let y = (c / (wf.rank as f64).powf(alpha)).ln();
        sum_xy += x * y;
        sum_x += x;
        sum_y += y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }
    let n = n as f64;
    let num = n * sum_xy - sum_x * sum_y;
    let den = (n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y);
    if den <= 0.0 {
        return 0.0;
    }
    num / den.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zipf_corpus() -> ZipfAnalyzer {
        // Frequencies follow 120 / rank for 12 distinct words.
        let mut analyzer = ZipfAnalyzer::new();
        let words = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet", "kilo", "lima",
        ];
        for (i, word) in words.iter().enumerate() {
            let count = 120 / (i + 1);
            for _ in 0..count {
                analyzer.add_word(word);
            }
        }
        analyzer
    }

    #[test]
    fn test_counts_and_ratios() {
        let mut analyzer = ZipfAnalyzer::new();
        analyzer.add_text("the cat and the dog");
        assert_eq!(analyzer.total_words(), 5);
        assert_eq!(analyzer.unique_words(), 4);
        assert_eq!(analyzer.frequency("the"), 2);
        assert_eq!(analyzer.frequency("cat"), 1);
        assert_eq!(analyzer.frequency("absent"), 0);
        assert!((analyzer.type_token_ratio() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_add_text_drops_single_letters() {
        let mut analyzer = ZipfAnalyzer::new();
        analyzer.add_text("a cat");
        assert_eq!(analyzer.total_words(), 1);
    }

    #[test]
    fn test_ranks_are_dense_and_ordered() {
        let analyzer = zipf_corpus();
        let freqs = analyzer.sorted_frequencies();
        assert_eq!(freqs.len(), 12);
        for (i, wf) in freqs.iter().enumerate() {
            assert_eq!(wf.rank, i + 1);
        }
        for pair in freqs.windows(2) {
            assert!(pair[0].frequency >= pair[1].frequency);
        }
        assert_eq!(freqs[0].word, "alpha");
    }

    #[test]
    fn test_exponent_near_one_for_ideal_corpus() {
        let analyzer = zipf_corpus();
        let stats = analyzer.analyze(12);
        assert_eq!(stats.zipf_constant, 120.0);
        assert!(
            (stats.zipf_exponent - 1.0).abs() < 0.1,
            "expected α ≈ 1, got {}",
            stats.zipf_exponent
        );
        assert!(stats.correlation > 0.99);
    }

    #[test]
    fn test_verify_zipf_law_on_ideal_corpus() {
        let analyzer = zipf_corpus();
        let stats = analyzer.analyze(12);
        assert!(verify_zipf_law(&stats.top_words, 0.3));
    }

    #[test]
    fn test_verify_rejects_tiny_samples() {
        let analyzer = zipf_corpus();
        let stats = analyzer.analyze(5);
        assert!(!verify_zipf_law(&stats.top_words, 0.3));
    }

    #[test]
    fn test_empty_analyzer() {
        let analyzer = ZipfAnalyzer::new();
        let stats = analyzer.analyze(10);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.zipf_constant, 0.0);
        assert_eq!(analyzer.type_token_ratio(), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut analyzer = zipf_corpus();
        analyzer.clear();
        assert_eq!(analyzer.total_words(), 0);
        assert_eq!(analyzer.unique_words(), 0);
    }
}
