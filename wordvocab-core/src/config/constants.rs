//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `WORDVOCAB_MIN_COUNT`).
pub(crate) const ENV_PREFIX: &str = "WORDVOCAB_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_INPUT_PATH: &str = "INPUT_PATH";
pub(crate) const ENV_VOCAB_PATH: &str = "VOCAB_PATH";
pub(crate) const ENV_MIN_COUNT: &str = "MIN_COUNT";
pub(crate) const ENV_LOWERCASE: &str = "LOWERCASE";
pub(crate) const ENV_KEEP_EMPTY_TOKENS: &str = "KEEP_EMPTY_TOKENS";
pub(crate) const ENV_TOP_N: &str = "TOP_N";

// --- Default values ---

pub(crate) const DEFAULT_INPUT_PATH: &str = "data/corpus.txt";
pub(crate) const DEFAULT_MIN_COUNT: i64 = 1;
pub(crate) const DEFAULT_LOWERCASE: bool = true;
pub(crate) const DEFAULT_KEEP_EMPTY_TOKENS: bool = false;
pub(crate) const DEFAULT_TOP_N: usize = 10;
