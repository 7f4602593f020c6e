//! Token frequency counting with a minimum-count filter.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::tokenizer::{Tokenizer, WordTokenizer};

/// Validated minimum count for [`FrequencyTable::filter_min`].
///
/// `0` and `1` both keep every token. Negative values are rejected with
/// [`Error::InvalidArgument`].
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct MinCount(usize);

impl MinCount {
    /// Keeps every token.
    pub const ALL: MinCount = MinCount(1);

    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when `k` is negative.
    pub fn new(k: i64) -> Result<Self> {
        usize::try_from(k).map(MinCount).map_err(|_| Error::InvalidArgument {
            name: "min_count",
            value: k.to_string(),
            constraint: "must be >= 0",
        })
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for MinCount {
    fn from(k: usize) -> Self {
        MinCount(k)
    }
}

impl TryFrom<i64> for MinCount {
    type Error = Error;

    fn try_from(k: i64) -> Result<Self> {
        MinCount::new(k)
    }
}

impl fmt::Display for MinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Token → occurrence count, iterated in token order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(BTreeMap<String, usize>);

impl FrequencyTable {
    /// Counts the tokens as given (no normalization) in a single pass.
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        FrequencyTable(counts)
    }

    /// Tokenizes `text` with `tokenizer` and counts the result.
    #[must_use]
    pub fn from_text(text: &str, tokenizer: &impl Tokenizer) -> Self {
        Self::from_tokens(tokenizer.tokenize(text))
    }

    /// Returns a new table holding only tokens seen at least `min` times.
    #[must_use]
    pub fn filter_min(&self, min: impl Into<MinCount>) -> Self {
        let min = min.into().get();
        FrequencyTable(
            self.0
                .iter()
                .filter(|(_, &count)| count >= min)
                .map(|(token, &count)| (token.clone(), count))
                .collect(),
        )
    }

    /// Tokens that occur more than once.
    #[must_use]
    pub fn repeated(&self) -> Self {
        self.filter_min(2)
    }

    /// The `n` most frequent tokens, highest count first; ties are broken by token order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.0.iter().map(|(t, &c)| (t.as_str(), c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Count for `token`, or `None` if it was not seen (or was filtered out).
    #[must_use]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.0.get(token).copied()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains_key(token)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(t, &c)| (t.as_str(), c))
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, usize> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a usize);
    type IntoIter = std::collections::btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Counts the normalized tokens of `text`, keeping those seen at least `min_count` times.
#[must_use]
pub fn count_tokens(text: &str, min_count: impl Into<MinCount>) -> FrequencyTable {
    let min_count = min_count.into();
    let table = FrequencyTable::from_text(text, &WordTokenizer::normalizing());
    let filtered = table.filter_min(min_count);
    debug!(
        distinct = table.len(),
        kept = filtered.len(),
        %min_count,
        "counted tokens"
    );
    filtered
}

/// [`count_tokens`] for an unchecked integer threshold.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] when `k` is negative.
pub fn count_tokens_checked(text: &str, k: i64) -> Result<FrequencyTable> {
    Ok(count_tokens(text, MinCount::new(k)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog!";

    #[test]
    fn counts_normalized_tokens() {
        let table = count_tokens(PANGRAM, MinCount::ALL);
        let expected = [
            ("the", 2),
            ("quick", 1),
            ("brown", 1),
            ("fox", 1),
            ("jumps", 1),
            ("over", 1),
            ("lazy", 1),
            ("dog", 1),
        ];
        assert_eq!(table.len(), expected.len());
        for (token, count) in expected {
            assert_eq!(table.get(token), Some(count), "{token}");
        }
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn min_count_filters_rare_tokens() {
        let table = count_tokens(PANGRAM, 2usize);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("the"), Some(2));
    }

    #[test]
    fn zero_min_count_keeps_everything() {
        assert_eq!(count_tokens(PANGRAM, 0usize), count_tokens(PANGRAM, 1usize));
        assert_eq!(count_tokens_checked(PANGRAM, 0).unwrap().len(), 8);
    }

    #[test]
    fn negative_min_count_is_invalid_argument() {
        assert!(matches!(
            count_tokens_checked(PANGRAM, -1),
            Err(Error::InvalidArgument { name: "min_count", .. })
        ));
        assert!(MinCount::try_from(-5i64).is_err());
        assert_eq!(MinCount::try_from(3i64).unwrap().get(), 3);
    }

    #[test]
    fn from_tokens_does_not_normalize_case() {
        let table = FrequencyTable::from_tokens(["The", "the", "the"]);
        assert_eq!(table.get("The"), Some(1));
        assert_eq!(table.get("the"), Some(2));
    }

    #[test]
    fn repeated_keeps_tokens_seen_more_than_once() {
        let table = FrequencyTable::from_tokens(["a", "b", "a", "c", "c", "c"]);
        let repeated = table.repeated();
        assert_eq!(repeated.iter().collect::<Vec<_>>(), [("a", 2), ("c", 3)]);
        assert!(!repeated.contains("b"));
    }

    #[test]
    fn most_common_orders_by_count_then_token() {
        let table = FrequencyTable::from_tokens(["b", "a", "c", "c", "b", "d"]);
        assert_eq!(table.most_common(3), [("b", 2), ("c", 2), ("a", 1)]);
        assert_eq!(table.most_common(10).len(), 4);
    }

    #[test]
    fn empty_text_yields_empty_table() {
        let table = count_tokens("", MinCount::ALL);
        assert!(table.is_empty());
        assert!(table.most_common(5).is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let table = FrequencyTable::from_tokens(["b", "a", "b"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
    }
}
