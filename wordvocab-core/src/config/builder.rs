//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`] and [`env_parsed`] to read env vars with a single place for key names
//! (see the `constants` submodule) and typed errors ([`ConfigError`]).

use std::path::PathBuf;

use tracing::debug;

use super::constants::{
    ENV_INPUT_PATH, ENV_KEEP_EMPTY_TOKENS, ENV_LOWERCASE, ENV_MIN_COUNT, ENV_PREFIX, ENV_TOP_N,
    ENV_VOCAB_PATH,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `TOP_N` → `WORDVOCAB_TOP_N`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails (e.g. `MIN_COUNT=abc` for `i64`).
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `WORDVOCAB_MIN_COUNT=abc`).
/// Range checks are left to [`Config::validate`].
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let input_path = env_string(&env_key(ENV_INPUT_PATH))?
        .map(PathBuf::from)
        .unwrap_or(default.input_path);
    let vocab_path = env_string(&env_key(ENV_VOCAB_PATH))?
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or(default.vocab_path);
    let min_count = env_parsed::<i64>(&env_key(ENV_MIN_COUNT))?.unwrap_or(default.min_count);
    let lowercase = env_parsed::<bool>(&env_key(ENV_LOWERCASE))?.unwrap_or(default.lowercase);
    let keep_empty_tokens =
        env_parsed::<bool>(&env_key(ENV_KEEP_EMPTY_TOKENS))?.unwrap_or(default.keep_empty_tokens);
    let top_n = env_parsed::<usize>(&env_key(ENV_TOP_N))?.unwrap_or(default.top_n);

    let config = Config {
        input_path,
        vocab_path,
        min_count,
        lowercase,
        keep_empty_tokens,
        top_n,
    };
    debug!(?config, "loaded config from env");
    Ok(config)
}
