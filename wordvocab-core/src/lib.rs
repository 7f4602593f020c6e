//! # wordvocab-core
//!
//! Word-level text pipeline: tokenize → count / build vocabulary → encode, with round-trip
//! decoding and a sigmoid activation for the recurrent layers that consume the encoded ids.
//!
//! ```
//! use wordvocab_core::{tokenize_and_encode, decode};
//!
//! let (encoded, vocab) = tokenize_and_encode(&["Good day!", "What a day"]);
//! assert_eq!(encoded[0].ids(), [2, 1]);
//! assert_eq!(decode(&encoded[1], &vocab).unwrap(), ["what", "a", "day"]);
//! ```

pub mod activation;
pub mod config;
pub mod data;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod tokenizer;
pub mod vocab;

pub use activation::{sigmoid, stable_sigmoid, Sigmoid};
pub use encoder::{decode, encode, tokenize_and_encode, EncodedDocument, Encoder};
pub use error::{Error, Result};
pub use frequency::{count_tokens, count_tokens_checked, FrequencyTable, MinCount};
pub use tokenizer::{tokenize, unique_tokens, EmptyTokens, Tokenizer, WordTokenizer};
pub use vocab::{build_vocabulary, Vocabulary};
