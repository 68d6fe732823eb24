//! Configuration error types.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Key binding with an empty key name")]
    EmptyKey,

    #[error("Key '{key}' is bound to unknown action '{action}'")]
    UnknownAction { key: String, action: String },

    #[error("History capacity {requested} exceeds the maximum of {max}")]
    HistoryTooLarge { requested: usize, max: usize },

    #[error("History capacity must be at least 1")]
    HistoryDisabled,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text was not valid TOML for this configuration
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration parsed but broke one or more rules
    #[error("Invalid configuration ({} violations): {}", .0.len(), join(.0))]
    Invalid(NonEmptyVec<ConfigViolation>),
}

fn join(violations: &NonEmptyVec<ConfigViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
