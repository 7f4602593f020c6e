//! Errors produced when loading a corpus or a serialized vocabulary.
//!
//! All errors from the data module use [`DataError`]; the crate-level
//! [`Error`](crate::Error) wraps it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the data loading module.
///
/// # Variants
///
/// - **Io**: Failed to read the file (e.g. file not found, permission denied, invalid UTF-8).
///   *When*: Opening or reading the path in [`PathLoader`](super::PathLoader),
///   [`load_from_path`](super::load_from_path) or [`load_vocabulary`](super::load_vocabulary).
///   *Recovery*: Ensure the path exists, is readable, and contains valid UTF-8.
///
/// - **Json**: The vocabulary file is not a JSON array of unique strings.
///   *When*: In [`load_vocabulary`](super::load_vocabulary).
///   *Recovery*: Regenerate the file from a report's `vocabulary` field.
///
/// - **EmptyCorpus**: The input has no documents (no lines, or only blank lines).
///   *When*: Building a [`Corpus`](super::Corpus).
///   *Recovery*: Provide at least one non-blank line.
///
/// - **EmptyDocument**: A document is empty after trimming.
///   *When*: Building a [`Document`](super::Document) directly.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data io {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data: invalid vocabulary file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("data: corpus has no documents")]
    EmptyCorpus,

    #[error("data: empty document")]
    EmptyDocument,
}
