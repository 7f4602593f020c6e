//! Configuration for the corpus pipeline: input paths, tokenizer options and report settings.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use std::path::PathBuf;

use constants::{
    DEFAULT_INPUT_PATH, DEFAULT_KEEP_EMPTY_TOKENS, DEFAULT_LOWERCASE, DEFAULT_MIN_COUNT,
    DEFAULT_TOP_N,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

use crate::frequency::MinCount;
use crate::tokenizer::{EmptyTokens, WordTokenizer};

/// Central configuration for the wordvocab pipeline.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Path to the input corpus (one document per line).
    pub input_path: PathBuf,
    /// Prebuilt vocabulary (JSON array of tokens). When `None`, the vocabulary is built from the corpus.
    pub vocab_path: Option<PathBuf>,

    /// Minimum count for the frequency report (must be >= 0).
    pub min_count: i64,
    /// Lowercase tokens (normalizing tokenizer) or keep case (raw).
    pub lowercase: bool,
    /// Keep words that become empty after punctuation stripping.
    pub keep_empty_tokens: bool,

    /// Number of most common tokens to report.
    pub top_n: usize,
}

impl Default for Config {
    /// Returns default configuration (suitable for tests and fallbacks).
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            vocab_path: None,
            min_count: DEFAULT_MIN_COUNT,
            lowercase: DEFAULT_LOWERCASE,
            keep_empty_tokens: DEFAULT_KEEP_EMPTY_TOKENS,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        MinCount::new(self.min_count).map_err(|e| ConfigError::Validation(e.to_string()))?;
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "input_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The validated minimum count.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`](crate::Error::InvalidArgument) when `min_count` is negative.
    pub fn min_count(&self) -> crate::Result<MinCount> {
        MinCount::new(self.min_count)
    }

    /// Tokenizer matching the case and empty-token settings.
    #[must_use]
    pub fn tokenizer(&self) -> WordTokenizer {
        let empty_tokens = if self.keep_empty_tokens {
            EmptyTokens::Keep
        } else {
            EmptyTokens::Drop
        };
        WordTokenizer::normalizing()
            .with_lowercase(self.lowercase)
            .with_empty_tokens(empty_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{ENV_KEEP_EMPTY_TOKENS, ENV_MIN_COUNT, ENV_TOP_N};
    use super::*;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_count().unwrap(), MinCount::ALL);
    }

    #[test]
    fn validate_rejects_negative_min_count() {
        let cfg = Config {
            min_count: -2,
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.message().contains("min_count"));
        assert!(matches!(
            cfg.min_count(),
            Err(crate::Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn validate_accepts_zero_min_count() {
        let cfg = Config {
            min_count: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_input_path() {
        let cfg = Config {
            input_path: PathBuf::new(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn tokenizer_follows_settings() {
        let cfg = Config {
            lowercase: false,
            keep_empty_tokens: true,
            ..Config::default()
        };
        assert_eq!(cfg.tokenizer().tokenize("Hi !"), ["Hi", ""]);
        assert_eq!(Config::default().tokenizer().tokenize("Hi !"), ["hi"]);
    }

    /// Lock so env tests don't run in parallel and pollute each other.
    static CONFIG_ENV_LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        let _g = env_lock();
        std::env::remove_var(env_key(ENV_MIN_COUNT));
        std::env::remove_var(env_key(ENV_TOP_N));
        let cfg = from_env().unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.min_count, 1);
        assert_eq!(cfg.top_n, 10);
    }

    #[test]
    fn from_env_overrides_with_env_vars() {
        let _g = env_lock();
        let key_min = env_key(ENV_MIN_COUNT);
        let key_empty = env_key(ENV_KEEP_EMPTY_TOKENS);
        std::env::set_var(&key_min, "3");
        std::env::set_var(&key_empty, "true");
        let cfg = from_env().unwrap();
        std::env::remove_var(key_min);
        std::env::remove_var(key_empty);
        assert_eq!(cfg.min_count, 3);
        assert!(cfg.keep_empty_tokens);
    }

    #[test]
    fn from_env_parses_negative_min_count_but_validate_rejects_it() {
        let _g = env_lock();
        let key = env_key(ENV_MIN_COUNT);
        std::env::set_var(&key, "-1");
        let res = from_env();
        std::env::remove_var(key);
        let cfg = res.unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn from_env_returns_error_on_invalid_parse() {
        let _g = env_lock();
        let key = env_key(ENV_TOP_N);
        std::env::set_var(&key, "many");
        let res = from_env();
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_error_parse_display() {
        let e = ConfigError::Parse {
            key: "WORDVOCAB_TOP_N".to_string(),
            value: "many".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert!(e.to_string().contains("WORDVOCAB_TOP_N"));
        assert!(e.to_string().contains("many"));
        assert_eq!(e.message(), "invalid digit found in string");
    }

    #[test]
    fn env_string_unset_returns_none() {
        assert_eq!(env_string("WORDVOCAB_UNLIKELY_KEY_12345").unwrap(), None);
    }

    #[test]
    fn env_parsed_unset_returns_none() {
        assert_eq!(env_parsed::<u64>("WORDVOCAB_UNLIKELY_KEY_67890").unwrap(), None);
    }
}
