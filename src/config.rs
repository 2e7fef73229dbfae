//! Global configuration constants for versedb.
//!
//! Codec parameters, pipeline defaults, and input limits live here as
//! compile-time constants; per-database behavior is configured through
//! `DatabaseOptions` at construction.

/// Bits per LZW code. 12 bits give 4096 distinct codes.
pub const LZW_CODE_BITS: u32 = 12;

/// Reserved stream-terminator code; always the last code of a stream.
pub const LZW_END_CODE: u16 = 4095;

/// First dictionary code available for multi-byte phrases; codes 0–255 are
/// the single-byte aliases. Entries are assigned up to and including 4094,
/// after which the dictionary stops growing (no reset).
pub const LZW_FIRST_FREE_CODE: u16 = 256;

/// Default number of results returned by ranked search.
pub const DEFAULT_TOP_K: usize = 10;

/// Tokenizer default minimum word-token length.
pub const TOKENIZER_MIN_TOKEN_LEN: usize = 1;

/// Tokenizer default maximum word-token length.
pub const TOKENIZER_MAX_TOKEN_LEN: usize = 1000;

/// Pipeline default minimum word-token length. Single-letter tokens carry
/// no retrieval signal, so the ingest path drops them.
pub const PIPELINE_MIN_TOKEN_LEN: usize = 2;

/// Pipeline default maximum word-token length.
pub const PIPELINE_MAX_TOKEN_LEN: usize = 100;

/// Number of top ranks used when fitting the Zipf exponent.
pub const ZIPF_FIT_RANKS: usize = 100;
