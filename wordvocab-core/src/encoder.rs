//! Document encoding: token sequences to id sequences and back.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::tokenizer::{Tokenizer, WordTokenizer};
use crate::vocab::Vocabulary;

/// Ids of one document, in token order. Duplicates allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedDocument(Vec<usize>);

impl EncodedDocument {
    #[must_use]
    pub fn ids(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn into_ids(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for EncodedDocument {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for EncodedDocument {
    fn from(ids: Vec<usize>) -> Self {
        EncodedDocument(ids)
    }
}

/// Pairs a tokenizer with a fixed [`Vocabulary`] to encode documents and decode id sequences.
///
/// The tokenizer must be the one the vocabulary was built with, otherwise every document is
/// likely to hit [`Error::OutOfVocabulary`].
#[derive(Clone, Debug)]
pub struct Encoder<T = WordTokenizer> {
    tokenizer: T,
    vocab: Vocabulary,
}

impl Encoder<WordTokenizer> {
    /// Encoder using the normalizing [`WordTokenizer`].
    #[must_use]
    pub fn new(vocab: Vocabulary) -> Self {
        Self::with_tokenizer(WordTokenizer::normalizing(), vocab)
    }
}

impl<T: Tokenizer> Encoder<T> {
    #[must_use]
    pub fn with_tokenizer(tokenizer: T, vocab: Vocabulary) -> Self {
        Encoder { tokenizer, vocab }
    }

    /// Builds the vocabulary from `documents` with `tokenizer` and wraps both.
    #[must_use]
    pub fn fit<D: AsRef<str>>(tokenizer: T, documents: &[D]) -> Self {
        let vocab = Vocabulary::from_documents(documents, &tokenizer);
        Self::with_tokenizer(tokenizer, vocab)
    }

    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    #[must_use]
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    #[must_use]
    pub fn into_vocab(self) -> Vocabulary {
        self.vocab
    }

    /// Encodes a single document.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfVocabulary`] at the first token with no id (`document` is reported as `0`).
    pub fn encode(&self, document: &str) -> Result<EncodedDocument> {
        self.encode_at(0, document)
    }

    /// Encodes every document, in order. Either all succeed or the first failure is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfVocabulary`] for the first unknown token, scanning documents in order and
    ///   tokens in order within each document.
    pub fn encode_all<D: AsRef<str>>(&self, documents: &[D]) -> Result<Vec<EncodedDocument>> {
        let encoded = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| self.encode_at(i, doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            documents = encoded.len(),
            tokens = encoded.iter().map(|e| e.len()).sum::<usize>(),
            "encoded documents"
        );
        Ok(encoded)
    }

    fn encode_at(&self, document: usize, text: &str) -> Result<EncodedDocument> {
        let tokens = self.tokenizer.tokenize(text);
        let mut ids = Vec::with_capacity(tokens.len());
        for (position, token) in tokens.into_iter().enumerate() {
            let id = self.vocab.id(&token).ok_or(Error::OutOfVocabulary {
                document,
                position,
                token,
            })?;
            ids.push(id);
        }
        trace!(document, len = ids.len(), "encoded document");
        Ok(EncodedDocument(ids))
    }

    /// Maps every id back to its token.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownId`] if an id is out of range for the vocabulary.
    pub fn decode(&self, ids: &[usize]) -> Result<Vec<String>> {
        decode(ids, &self.vocab)
    }

    /// Decodes and joins the tokens with single spaces.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownId`] if an id is out of range for the vocabulary.
    pub fn decode_to_string(&self, ids: &[usize]) -> Result<String> {
        Ok(self.decode(ids)?.join(" "))
    }
}

/// Encodes `documents` against an existing vocabulary with the normalizing tokenizer.
///
/// # Errors
///
/// - [`Error::OutOfVocabulary`] for the first unknown token.
pub fn encode<D: AsRef<str>>(documents: &[D], vocab: &Vocabulary) -> Result<Vec<EncodedDocument>> {
    Encoder::new(vocab.clone()).encode_all(documents)
}

/// Maps ids back to tokens through `vocab`.
///
/// # Errors
///
/// - [`Error::UnknownId`] if an id is out of range.
pub fn decode(ids: &[usize], vocab: &Vocabulary) -> Result<Vec<String>> {
    ids.iter()
        .map(|&id| {
            vocab.token(id).map(str::to_string).ok_or(Error::UnknownId {
                id,
                vocab_size: vocab.len(),
            })
        })
        .collect()
}

/// Builds the vocabulary of `documents` and encodes them with it. Never fails: every token is
/// in the vocabulary by construction.
#[must_use]
pub fn tokenize_and_encode<D: AsRef<str>>(documents: &[D]) -> (Vec<EncodedDocument>, Vocabulary) {
    let encoder = Encoder::fit(WordTokenizer::normalizing(), documents);
    let tokenizer = encoder.tokenizer();
    let vocab = encoder.vocab();
    // Same tokenizer, same documents: every lookup hits.
    let encoded = documents
        .iter()
        .map(|doc| {
            EncodedDocument(
                tokenizer
                    .tokenize(doc.as_ref())
                    .iter()
                    .filter_map(|token| vocab.id(token))
                    .collect(),
            )
        })
        .collect();
    (encoded, encoder.into_vocab())
}
