//! Character-class tokenizer with byte offsets.
//!
//! Splits raw text into classified spans (word / number / punctuation /
//! whitespace) driven by ASCII character classes. Words are maximal runs of
//! alphanumerics plus `_` and `-` starting with a letter; numbers are maximal
//! runs of digits plus `.` and `,` starting with a digit; punctuation is one
//! character per token. Any non-ASCII character is treated as punctuation,
//! which keeps every span boundary on a UTF-8 char boundary.

use serde::{Deserialize, Serialize};

/// Classification of an emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Alphabetic-led run of letters, digits, `_`, `-`.
    Word,
    /// Digit-led run of digits, `.`, `,`.
    Number,
    /// A single punctuation (or non-ASCII) character.
    Punctuation,
    /// A maximal run of spaces, tabs, and line breaks.
    Whitespace,
}

/// A token with its text, byte offset into the input, byte length, and kind.
///
/// `text` preserves the raw input bytes except for A–Z → a–z folding of
/// `Word` tokens when `lower_case` is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub len: usize,
    pub kind: TokenKind,
}

/// Tokenizer configuration.
///
/// Skipped kinds are never emitted. The `[min_token_length,
/// max_token_length]` filter applies to `Word` tokens only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerOptions {
    pub lower_case: bool,
    pub skip_whitespace: bool,
    pub skip_punctuation: bool,
    pub skip_numbers: bool,
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            lower_case: true,
            skip_whitespace: true,
            skip_punctuation: true,
            skip_numbers: true,
            min_token_length: crate::config::TOKENIZER_MIN_TOKEN_LEN,
            max_token_length: crate::config::TOKENIZER_MAX_TOKEN_LEN,
        }
    }
}

/// Splits text into tokens according to the configured options.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Alpha,
    Digit,
    Whitespace,
    Punctuation,
}

fn classify(c: char) -> CharClass {
    if c.is_ascii_alphabetic() {
        CharClass::Alpha
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if matches!(c, ' ' | '\t' | '\n' | '\r') {
        CharClass::Whitespace
    } else {
        CharClass::Punctuation
    }
}

fn is_word_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_number_continuation(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

impl Tokenizer {
    /// Creates a tokenizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tokenizer with the given options.
    pub fn with_options(options: TokenizerOptions) -> Self {
        Self { options }
    }

    /// Returns the active options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Tokenizes `text`, emitting tokens in strictly increasing start-offset
    /// order. Offsets are byte offsets into `text`.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some(&(start, c)) = chars.peek() {
            match classify(c) {
                CharClass::Whitespace => {
                    let mut end = start;
                    while let Some(&(i, c)) = chars.peek() {
                        if classify(c) != CharClass::Whitespace {
                            break;
                        }
                        end = i + c.len_utf8();
                        chars.next();
                    }
                    if !self.options.skip_whitespace {
                        tokens.push(Token {
                            text: text[start..end].to_string(),
                            start,
                            len: end - start,
                            kind: TokenKind::Whitespace,
                        });
                    }
                }
                CharClass::Alpha => {
                    let mut end = start;
                    while let Some(&(i, c)) = chars.peek() {
                        if !is_word_continuation(c) {
                            break;
                        }
                        end = i + c.len_utf8();
                        chars.next();
                    }
                    let mut word = text[start..end].to_string();
                    if self.options.lower_case {
                        word.make_ascii_lowercase();
                    }
                    if word.len() >= self.options.min_token_length
                        && word.len() <= self.options.max_token_length
                    {
                        tokens.push(Token {
                            text: word,
                            start,
                            len: end - start,
                            kind: TokenKind::Word,
                        });
                    }
                }
                CharClass::Digit => {
                    let mut end = start;
                    while let Some(&(i, c)) = chars.peek() {
                        if !is_number_continuation(c) {
                            break;
                        }
                        end = i + c.len_utf8();
                        chars.next();
                    }
                    if !self.options.skip_numbers {
                        tokens.push(Token {
                            text: text[start..end].to_string(),
                            start,
                            len: end - start,
                            kind: TokenKind::Number,
                        });
                    }
                }
                CharClass::Punctuation => {
                    let end = start + c.len_utf8();
                    chars.next();
                    if !self.options.skip_punctuation {
                        tokens.push(Token {
                            text: text[start..end].to_string(),
                            start,
                            len: end - start,
                            kind: TokenKind::Punctuation,
                        });
                    }
                }
            }
        }

        tokens
    }

    /// Tokenizes `text` and returns only the token texts.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.tokenize_to_strings("hello world");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_preserves_positions() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("foo bar");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].len, 3);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].len, 3);
    }

    #[test]
    fn test_offsets_strictly_increasing() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_whitespace: false,
            skip_punctuation: false,
            skip_numbers: false,
            ..TokenizerOptions::default()
        });
        let tokens = tokenizer.tokenize("a b, 12 c!");
        for pair in tokens.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn test_numbers_emitted_when_enabled() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_numbers: false,
            ..TokenizerOptions::default()
        });
        let tokens = tokenizer.tokenize("release 3.14 shipped");
        let nums: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .collect();
        assert_eq!(nums.len(), 1);
        assert_eq!(nums[0].text, "3.14");
    }

    #[test]
    fn test_numbers_skipped_by_default() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.tokenize_to_strings("release 42 shipped");
        assert_eq!(words, vec!["release", "shipped"]);
    }

    #[test]
    fn test_punctuation_single_char_tokens() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_punctuation: false,
            ..TokenizerOptions::default()
        });
        let tokens = tokenizer.tokenize("wait...");
        let puncts: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Punctuation)
            .collect();
        assert_eq!(puncts.len(), 3);
        for p in puncts {
            assert_eq!(p.text, ".");
        }
    }

    #[test]
    fn test_lower_case_folding() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.tokenize_to_strings("Hello WORLD");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn test_preserve_case_when_disabled() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            lower_case: false,
            ..TokenizerOptions::default()
        });
        let words = tokenizer.tokenize_to_strings("Hello WORLD");
        assert_eq!(words, vec!["Hello", "WORLD"]);
    }

    #[test]
    fn test_min_token_length_filter() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            min_token_length: 3,
            ..TokenizerOptions::default()
        });
        let words = tokenizer.tokenize_to_strings("a an the cat");
        assert_eq!(words, vec!["the", "cat"]);
    }

    #[test]
    fn test_max_token_length_filter() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            max_token_length: 5,
            ..TokenizerOptions::default()
        });
        let words = tokenizer.tokenize_to_strings("tiny enormousword");
        assert_eq!(words, vec!["tiny"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("  \t\n  ").is_empty());
    }

    #[test]
    fn test_whitespace_run_is_one_span() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_whitespace: false,
            ..TokenizerOptions::default()
        });
        let tokens = tokenizer.tokenize("a  \t b");
        let ws: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Whitespace)
            .collect();
        assert_eq!(ws.len(), 1);
        assert_eq!(ws[0].text, "  \t ");
    }

    #[test]
    fn test_hyphenated_and_underscored_words() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.tokenize_to_strings("well-known snake_case");
        assert_eq!(words, vec!["well-known", "snake_case"]);
    }

    #[test]
    fn test_word_must_start_with_letter() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_numbers: false,
            ..TokenizerOptions::default()
        });
        // "2nd" starts with a digit: the digit run is a number, "nd" a word.
        let tokens = tokenizer.tokenize("2nd");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[1].text, "nd");
    }

    #[test]
    fn test_non_ascii_treated_as_punctuation() {
        let tokenizer = Tokenizer::with_options(TokenizerOptions {
            skip_punctuation: false,
            ..TokenizerOptions::default()
        });
        let tokens = tokenizer.tokenize("café");
        assert_eq!(tokens[0].text, "caf");
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[1].text, "é");
    }

    #[test]
    fn test_complex_text() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.tokenize_to_strings("The rain, in Spain (1957)!");
        assert_eq!(words, vec!["the", "rain", "in", "spain"]);
    }
}
