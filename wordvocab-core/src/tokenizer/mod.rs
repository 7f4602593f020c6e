//! Tokenization: split raw text into word tokens.
//!
//! This module defines the **trait** ([`Tokenizer`]) and the convenience functions used across the
//! crate ([`tokenize`], [`unique_tokens`]). Implementations live in the `impls` submodule
//! (e.g. [`WordTokenizer`] for whitespace words with punctuation stripped at both ends).

mod impls;

use std::collections::BTreeSet;

pub use impls::{EmptyTokens, WordTokenizer, DEFAULT_STRIP_CHARS};

/// Trait for tokenizers: turn text into an ordered sequence of tokens.
///
/// Tokenization is infallible and pure: the same input always yields the same tokens.
pub trait Tokenizer {
    /// Splits `text` into tokens, preserving order and duplicates.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Returns the distinct tokens of `text` in ascending order.
    fn unique_tokens(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

/// Tokenizes `text` with the default (normalizing) [`WordTokenizer`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    WordTokenizer::normalizing().tokenize(text)
}

/// Lowercased, deduplicated tokens of `text` in alphabetical order.
#[must_use]
pub fn unique_tokens(text: &str) -> Vec<String> {
    WordTokenizer::normalizing().unique_tokens(text)
}
