//! Crate-level error type.
//!
//! Domain failures (bad arguments, unknown tokens or ids) are variants of [`Error`] directly;
//! the config and data modules keep their own error types, wrapped here via `From`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::DataError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by tokenization, vocabulary and encoding operations.
///
/// # Variants
///
/// - **InvalidArgument**: A call parameter is outside its allowed range (e.g. a negative minimum count).
///   *When*: Constructing a [`MinCount`](crate::frequency::MinCount) or calling
///   [`count_tokens_checked`](crate::frequency::count_tokens_checked).
///   *Recovery*: Pass a value that satisfies `constraint`.
///
/// - **OutOfVocabulary**: A token has no id in the vocabulary.
///   *When*: During [`Encoder::encode_all`](crate::encoder::Encoder::encode_all). Encoding stops at the
///   first unknown token (document order, then token order).
///   *Recovery*: Build the vocabulary from a corpus covering every document, or use
///   [`tokenize_and_encode`](crate::encoder::tokenize_and_encode).
///
/// - **UnknownId**: An id is not in `0..vocab_size`.
///   *When*: During decoding.
///   *Recovery*: Decode only ids produced by the same vocabulary.
///
/// - **DuplicateToken**: A serialized vocabulary lists the same token twice.
///   *When*: Deserializing a [`Vocabulary`](crate::vocab::Vocabulary).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument {name}={value}: {constraint}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Offending value, rendered.
        value: String,
        /// The rule that was violated.
        constraint: &'static str,
    },

    #[error("out of vocabulary: token {token:?} (document {document}, position {position})")]
    OutOfVocabulary {
        /// Index of the document in the input sequence.
        document: usize,
        /// Index of the token within that document's tokenization.
        position: usize,
        /// The unknown token.
        token: String,
    },

    #[error("unknown token id {id} (vocabulary size {vocab_size})")]
    UnknownId { id: usize, vocab_size: usize },

    #[error("duplicate token {0:?} in vocabulary")]
    DuplicateToken(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),
}
