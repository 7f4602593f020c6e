//! Configuration errors.
//!
//! All errors produced by the config module (validation and env loading) use [`ConfigError`].
//! Callers can match on variants to handle specific cases or use [`ConfigError::message`] for logging.

use thiserror::Error;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: A value is out of range (e.g. a negative `min_count`).
///   *When*: After building a `Config` and calling `validate()`.
///   *Recovery*: Fix the value (via env or code) so that `validate()` passes.
///
/// - **EnvVar**: An environment variable could not be read (e.g. invalid Unicode).
///   *When*: When using env helpers to read a key.
///   *Recovery*: Ensure the variable contains valid Unicode, or unset it.
///
/// - **Parse**: An environment variable was set but could not be parsed into the expected type
///   (e.g. `WORDVOCAB_TOP_N=many`).
///   *When*: When using `env_parsed` and the value is not valid for the target type.
///   *Recovery*: Set a valid value or unset the variable to use the default.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("config validation: {0}")]
    Validation(String),

    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name that was read.
        key: String,
        /// Underlying cause (e.g. not Unicode).
        message: String,
    },

    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Human-readable parse reason.
        message: String,
    },
}

impl ConfigError {
    /// Returns a short message suitable for logging or user display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } | ConfigError::Parse { message, .. } => message,
        }
    }
}
