//! Word tokenizer: whitespace-delimited words with punctuation stripped from both ends.

use super::super::Tokenizer;

/// Characters stripped from both ends of each word by default.
pub const DEFAULT_STRIP_CHARS: [char; 4] = ['.', ',', '!', '?'];

/// What to do with a word that becomes empty after stripping (e.g. a lone `"!"`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmptyTokens {
    /// Keep the empty string as a token.
    Keep,
    /// Drop it from the output.
    #[default]
    Drop,
}

/// Splits text on whitespace and strips a fixed set of punctuation characters from both ends of
/// every word. Internal punctuation is left alone, so contractions like `don't` survive.
///
/// Use [`WordTokenizer::raw`] to keep the original case, or [`WordTokenizer::normalizing`]
/// (the default) to lowercase every token.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    strip_chars: Vec<char>,
    lowercase: bool,
    empty_tokens: EmptyTokens,
}

impl WordTokenizer {
    /// Strips punctuation but preserves case.
    #[must_use]
    pub fn raw() -> Self {
        WordTokenizer {
            strip_chars: DEFAULT_STRIP_CHARS.to_vec(),
            lowercase: false,
            empty_tokens: EmptyTokens::default(),
        }
    }

    /// Strips punctuation and lowercases.
    #[must_use]
    pub fn normalizing() -> Self {
        WordTokenizer {
            lowercase: true,
            ..Self::raw()
        }
    }

    /// Replaces the set of characters stripped from word boundaries.
    #[must_use]
    pub fn with_strip_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.strip_chars = chars.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    #[must_use]
    pub fn with_empty_tokens(mut self, policy: EmptyTokens) -> Self {
        self.empty_tokens = policy;
        self
    }

    /// Returns `true` if tokens are lowercased.
    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    #[must_use]
    pub fn empty_tokens(&self) -> EmptyTokens {
        self.empty_tokens
    }

    fn clean_word(&self, word: &str) -> String {
        let stripped = word.trim_matches(|c: char| self.strip_chars.contains(&c));
        if self.lowercase {
            stripped.to_lowercase()
        } else {
            stripped.to_string()
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::normalizing()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| self.clean_word(word))
            .filter(|token| self.empty_tokens == EmptyTokens::Keep || !token.is_empty())
            .collect()
    }
}
