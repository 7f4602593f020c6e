//! Types for loaded data: [`Document`] (one non-blank line) and [`Corpus`] (non-empty list of documents).

use std::fmt;

use super::DataError;

/// A single non-empty document (one trimmed line of the corpus).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document(String);

impl Document {
    /// Creates a [`Document`] from a line (trimmed).
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyDocument`] when `line` is empty or only whitespace.
    pub fn new(line: &str) -> Result<Self, DataError> {
        let s = line.trim();
        if s.is_empty() {
            return Err(DataError::EmptyDocument);
        }
        Ok(Document(s.to_string()))
    }

    /// Returns the inner string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An ordered, non-empty list of [`Document`]s.
///
/// Documents keep their input order; [`Corpus::documents`] can be passed straight to
/// [`build_vocabulary`](crate::vocab::build_vocabulary) or [`encode`](crate::encoder::encode).
#[derive(Clone, Debug)]
pub struct Corpus(Vec<Document>);

impl Corpus {
    /// Builds a [`Corpus`] from a non-empty list of documents.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyCorpus`] when `documents` is empty.
    pub fn new(documents: Vec<Document>) -> Result<Self, DataError> {
        if documents.is_empty() {
            return Err(DataError::EmptyCorpus);
        }
        Ok(Corpus(documents))
    }

    /// Parses one document per line, skipping blank lines.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyCorpus`] when every line is blank.
    pub fn from_lines(text: &str) -> Result<Self, DataError> {
        let documents = text
            .lines()
            .filter_map(|line| Document::new(line).ok())
            .collect();
        Self::new(documents)
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`Corpus`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.0
    }

    /// Returns the documents as string slices.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.0.iter().map(Document::as_str).collect()
    }
}
