//! [`CorpusLoader`](super::super::CorpusLoader) implementation that reads from a file path
//! (UTF-8, one document per line), plus loading of a JSON vocabulary file.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::super::{Corpus, CorpusLoader, DataError};
use crate::vocab::Vocabulary;

/// Loads a corpus from a file path (UTF-8, one trimmed document per line, blank lines skipped).
#[derive(Clone, Debug)]
pub struct PathLoader<P>(pub P);

impl<P> PathLoader<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given path.
    #[must_use]
    pub fn new(path: P) -> Self {
        PathLoader(path)
    }
}

impl<P> CorpusLoader for PathLoader<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Corpus, DataError> {
        let path = self.0.as_ref();
        let content = read(path)?;
        let corpus = Corpus::from_lines(&content)?;
        debug!(path = %path.display(), documents = corpus.len(), "loaded corpus");
        Ok(corpus)
    }
}

/// Convenience: load a corpus from a path using [`PathLoader`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
/// - [`DataError::EmptyCorpus`] when the file has no non-blank lines.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Corpus, DataError> {
    PathLoader::new(path).load()
}

/// Loads a vocabulary saved as a JSON array of tokens in id order.
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read.
/// - [`DataError::Json`] when the content is not an array of strings or repeats a token.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vocabulary, DataError> {
    let path = path.as_ref();
    let content = read(path)?;
    let vocab: Vocabulary = serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), size = vocab.len(), "loaded vocabulary");
    Ok(vocab)
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
