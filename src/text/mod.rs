//! Text processing: tokenization, stemming, lemmatization, and the
//! pipeline composing them into a normalized term stream.

/// Irregular-form table backing the lemmatizer.
pub mod lemmas;
/// Dictionary lemmatizer with stemmer fallback.
pub mod lemmatizer;
/// Tokenize → case-fold → stem/lemmatize composition.
pub mod pipeline;
/// Porter stemmer for English.
pub mod stemmer;
/// Character-class tokenizer with byte offsets.
pub mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use pipeline::{Pipeline, PipelineOptions};
pub use stemmer::stem;
pub use tokenizer::{Token, TokenKind, Tokenizer, TokenizerOptions};
