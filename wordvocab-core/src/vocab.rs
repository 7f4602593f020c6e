//! Vocabulary: deterministic bijection between tokens and integer ids.
//!
//! Ids are assigned in ascending order over the sorted set of unique tokens, so the same token set
//! always produces the same vocabulary no matter which document a token came from first.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::tokenizer::{Tokenizer, WordTokenizer};

/// Maps tokens to ids and back. Ids are contiguous from `0` to `len - 1`.
///
/// Immutable once built. Serializes as the JSON array of tokens in id order; deserializing
/// rejects duplicates with [`Error::DuplicateToken`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    id_to_token: Vec<String>,
    token_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from any token stream: duplicates collapse, ids follow sorted order.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
        let id_to_token: Vec<String> = unique.into_iter().collect();
        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id))
            .collect();
        Vocabulary {
            id_to_token,
            token_to_id,
        }
    }

    /// Tokenizes every document with `tokenizer` and builds the vocabulary of their union.
    #[must_use]
    pub fn from_documents<D>(documents: &[D], tokenizer: &impl Tokenizer) -> Self
    where
        D: AsRef<str>,
    {
        let vocab = Self::from_tokens(
            documents
                .iter()
                .flat_map(|doc| tokenizer.tokenize(doc.as_ref())),
        );
        debug!(
            documents = documents.len(),
            size = vocab.len(),
            "built vocabulary"
        );
        vocab
    }

    /// Returns the number of tokens (vocab size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Returns `true` if the vocab is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Returns the token for `id`, or `None` if out of range.
    #[must_use]
    pub fn token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Returns the id for `token`, or `None` if not in vocab.
    #[must_use]
    pub fn id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Tokens in id order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.id_to_token
    }

    /// `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (id, token.as_str()))
    }

    /// Token → id map, ordered by token.
    #[must_use]
    pub fn token_to_id(&self) -> BTreeMap<String, usize> {
        self.iter().map(|(id, t)| (t.to_string(), id)).collect()
    }

    /// Id → token map, ordered by id.
    #[must_use]
    pub fn id_to_token(&self) -> BTreeMap<usize, String> {
        self.iter().map(|(id, t)| (id, t.to_string())).collect()
    }

    /// Consumes the vocabulary into its `(token_to_id, id_to_token)` pair.
    #[must_use]
    pub fn into_maps(self) -> (HashMap<String, usize>, HashMap<usize, String>) {
        let id_to_token = self.id_to_token.into_iter().enumerate().collect();
        (self.token_to_id, id_to_token)
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = Error;

    /// Takes tokens already in id order (token `i` gets id `i`).
    fn try_from(id_to_token: Vec<String>) -> Result<Self, Error> {
        let mut token_to_id = HashMap::with_capacity(id_to_token.len());
        for (id, token) in id_to_token.iter().enumerate() {
            if token_to_id.insert(token.clone(), id).is_some() {
                return Err(Error::DuplicateToken(token.clone()));
            }
        }
        Ok(Vocabulary {
            id_to_token,
            token_to_id,
        })
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.id_to_token
    }
}

/// Builds the vocabulary of `documents` with the default (normalizing) tokenizer.
#[must_use]
pub fn build_vocabulary<D: AsRef<str>>(documents: &[D]) -> Vocabulary {
    Vocabulary::from_documents(documents, &WordTokenizer::normalizing())
}
