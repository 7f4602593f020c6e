//! Input data loading: corpus documents from a file, and serialized vocabularies.
//!
//! This module defines the **trait** ([`CorpusLoader`]), **models** ([`Document`], [`Corpus`]), and
//! **error** ([`DataError`]). Implementations (e.g. [`PathLoader`] for file paths) are in the
//! `impls` submodule.

mod error;
mod impls;
mod types;

pub use error::DataError;
pub use impls::{load_from_path, load_vocabulary, PathLoader};
pub use types::{Corpus, Document};

/// Trait for loading a corpus.
pub trait CorpusLoader {
    /// Loads the corpus. Returns [`Corpus`] or a [`DataError`].
    fn load(&self) -> Result<Corpus, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;
    use std::io::Write;
    use std::path::Path;

    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_from_path_returns_trimmed_documents_in_order() {
        let f = file_with("first line\n  second line  \n\n   \nthird\n");
        let corpus = load_from_path(f.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.documents()[1].as_str(), "second line");
        assert_eq!(corpus.lines(), ["first line", "second line", "third"]);
    }

    #[test]
    fn load_from_path_empty_file_returns_empty_corpus_error() {
        let f = file_with("");
        assert!(matches!(load_from_path(f.path()), Err(DataError::EmptyCorpus)));
    }

    #[test]
    fn load_from_path_blank_lines_only_returns_empty_corpus_error() {
        let f = file_with("   \n\n\t\n");
        assert!(matches!(load_from_path(f.path()), Err(DataError::EmptyCorpus)));
    }

    #[test]
    fn load_from_path_missing_file_returns_io_error() {
        let path = Path::new("/nonexistent/wordvocab_never_exists.txt");
        let err = load_from_path(path).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("wordvocab_never_exists"));
    }

    #[test]
    fn path_loader_implements_trait() {
        let f = file_with("only one\n");
        let loader = PathLoader::new(f.path());
        assert_eq!(loader.load().unwrap().lines(), ["only one"]);
    }

    #[test]
    fn document_new_rejects_blank() {
        assert!(matches!(Document::new("  "), Err(DataError::EmptyDocument)));
        assert_eq!(Document::new(" hi ").unwrap().to_string(), "hi");
    }

    #[test]
    fn corpus_new_rejects_empty_vec() {
        assert!(matches!(Corpus::new(vec![]), Err(DataError::EmptyCorpus)));
    }

    #[test]
    fn corpus_documents_feed_vocabulary_builder() {
        let corpus = Corpus::from_lines("Good day!\nWhat a day\n").unwrap();
        let vocab = crate::vocab::build_vocabulary(corpus.documents());
        assert_eq!(vocab.tokens(), ["a", "day", "good", "what"]);
    }

    #[test]
    fn load_vocabulary_reads_json_token_list() {
        let f = file_with(r#"["brown", "dog", "fox"]"#);
        let vocab = load_vocabulary(f.path()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("fox"), Some(2));
    }

    #[test]
    fn load_vocabulary_rejects_duplicates_and_bad_json() {
        let dup = file_with(r#"["a", "a"]"#);
        let err = load_vocabulary(dup.path()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
        assert!(err.to_string().contains("duplicate token"));

        let bad = file_with("{not json");
        assert!(matches!(load_vocabulary(bad.path()), Err(DataError::Json { .. })));
    }
}
