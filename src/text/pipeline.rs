//! Text-processing pipeline: tokenize → case-fold → stem or lemmatize.
//!
//! `process` is the canonical ingest path turning raw text into normalized
//! terms; `normalize_term` applies the same chain to a single string (query
//! operands, term-weight lookups). Applying `normalize_term` to the output
//! of `process` is a fixed point.

use crate::text::lemmatizer::Lemmatizer;
use crate::text::stemmer::stem;
use crate::text::tokenizer::{Token, Tokenizer, TokenizerOptions};
use serde::{Deserialize, Serialize};

/// Pipeline configuration; a strict superset of the tokenizer options.
///
/// When `use_lemmatization` is set the lemmatizer is used (which itself
/// falls back to the stemmer on a dictionary miss); otherwise
/// `use_stemming` selects the plain Porter stemmer; otherwise tokens are
/// only case-folded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub lower_case: bool,
    pub use_stemming: bool,
    pub use_lemmatization: bool,
    pub skip_punctuation: bool,
    pub skip_numbers: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            lower_case: true,
            use_stemming: true,
            use_lemmatization: false,
            skip_punctuation: true,
            skip_numbers: true,
            min_token_length: crate::config::PIPELINE_MIN_TOKEN_LEN,
            max_token_length: crate::config::PIPELINE_MAX_TOKEN_LEN,
        }
    }
}

/// Composes the tokenizer with case-folding and stemming or lemmatization.
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: PipelineOptions,
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    /// Creates a pipeline with the given options. The lemmatizer dictionary
    /// is built once here.
    pub fn with_options(options: PipelineOptions) -> Self {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            lower_case: options.lower_case,
            skip_whitespace: true,
            skip_punctuation: options.skip_punctuation,
            skip_numbers: options.skip_numbers,
            min_token_length: options.min_token_length,
            max_token_length: options.max_token_length,
        });
        Self {
            options,
            tokenizer,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Returns the active options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Registers an extra `form → lemma` mapping on the lemmatizer.
    pub fn add_word(&mut self, form: &str, lemma: &str) {
        self.lemmatizer.add_word(form, lemma);
    }

    /// Turns raw text into an ordered list of normalized terms.
    pub fn process(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize_to_strings(text);
        if self.options.use_lemmatization {
            tokens.iter().map(|t| self.lemmatizer.lemmatize(t)).collect()
        } else if self.options.use_stemming {
            tokens.iter().map(|t| stem(t)).collect()
        } else {
            tokens
        }
    }

    /// Tokenizes raw text without stemming or lemmatization, keeping spans.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    /// Applies the case-fold + lemma/stem chain to a single term.
    pub fn normalize_term(&self, term: &str) -> String {
        let folded = if self.options.lower_case {
            term.to_ascii_lowercase()
        } else {
            term.to_string()
        };
        if self.options.use_lemmatization {
            self.lemmatizer.lemmatize(&folded)
        } else if self.options.use_stemming {
            stem(&folded)
        } else {
            folded
        }
    }

    /// Applies `normalize_term` elementwise.
    pub fn normalize_terms(&self, terms: &[String]) -> Vec<String> {
        terms.iter().map(|t| self.normalize_term(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_process() {
        let pipeline = Pipeline::new();
        let terms = pipeline.process("running dogs");
        assert_eq!(terms, vec!["run", "dog"]);
    }

    #[test]
    fn test_without_stemming() {
        let pipeline = Pipeline::with_options(PipelineOptions {
            use_stemming: false,
            ..PipelineOptions::default()
        });
        let terms = pipeline.process("Running Dogs");
        assert_eq!(terms, vec!["running", "dogs"]);
    }

    #[test]
    fn test_lemmatization_takes_precedence() {
        let pipeline = Pipeline::with_options(PipelineOptions {
            use_stemming: true,
            use_lemmatization: true,
            ..PipelineOptions::default()
        });
        let terms = pipeline.process("children were running");
        assert_eq!(terms, vec!["child", "be", "run"]);
    }

    #[test]
    fn test_normalize_term() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.normalize_term("Running"), "run");
        assert_eq!(pipeline.normalize_term("CATS"), "cat");
    }

    #[test]
    fn test_normalize_term_with_lemmas() {
        let pipeline = Pipeline::with_options(PipelineOptions {
            use_lemmatization: true,
            ..PipelineOptions::default()
        });
        assert_eq!(pipeline.normalize_term("children"), "child");
        assert_eq!(pipeline.normalize_term("were"), "be");
        assert_eq!(pipeline.normalize_term("analyses"), "analysis");
    }

    #[test]
    fn test_normalize_is_idempotent_over_process() {
        let pipeline = Pipeline::new();
        let terms = pipeline.process("the children were swimming easily");
        for term in &terms {
            assert_eq!(&pipeline.normalize_term(term), term);
        }
    }

    #[test]
    fn test_default_min_length_drops_single_letters() {
        let pipeline = Pipeline::new();
        let terms = pipeline.process("a b cat");
        assert_eq!(terms, vec!["cat"]);
    }

    #[test]
    fn test_punctuation_and_numbers_skipped() {
        let pipeline = Pipeline::new();
        let terms = pipeline.process("stars, 42 moons!");
        assert_eq!(terms, vec!["star", "moon"]);
    }
}
