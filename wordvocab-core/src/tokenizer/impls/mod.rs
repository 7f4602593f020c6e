//! Implementations of [`Tokenizer`](super::Tokenizer).
//!
//! One file per implementation: e.g. `word` for whitespace-delimited words.

mod word;

pub use word::{EmptyTokens, WordTokenizer, DEFAULT_STRIP_CHARS};
