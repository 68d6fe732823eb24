//! Widget configuration.
//!
//! Configuration is read once when the widget is created. Validation uses
//! Stillwater's `Validation` so that every problem in a file is reported in
//! one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use keypad::config::CalculatorConfig;
//! use keypad::input::Action;
//! use keypad::theme::Theme;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     theme = "dark"
//!     history_capacity = 8
//!
//!     [keys]
//!     "x" = "*"
//!     "c" = "clear"
//!     "#,
//! )?;
//!
//! assert_eq!(config.theme, Theme::Dark);
//! let keymap = config.keymap()?;
//! assert_eq!(keymap.resolve("c"), Some(Action::Clear));
//! # Ok::<(), keypad::config::ConfigError>(())
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::input::{Action, Keymap};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

/// Number of history records kept when not configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// Largest accepted history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

/// Settings for a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Theme at startup
    pub theme: Theme,

    /// Maximum transition records kept, between 1 and [`MAX_HISTORY_CAPACITY`]
    pub history_capacity: usize,

    /// Extra key bindings: key name -> action token
    pub keys: BTreeMap<String, String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            keys: BTreeMap::new(),
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate TOML configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.check()?;
        debug!(
            theme = %config.theme,
            history_capacity = config.history_capacity,
            extra_keys = config.keys.len(),
            "Loaded calculator configuration"
        );
        Ok(config)
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![self.capacity_check(), self.bindings().map(|_| ())];
        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => {
                warn!(
                    count = violations.len(),
                    "Calculator configuration rejected"
                );
                Err(ConfigError::Invalid(violations))
            }
        }
    }

    /// Default keyboard bindings plus the configured extras.
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        match self.bindings() {
            Validation::Success(bindings) => Ok(bindings
                .into_iter()
                .fold(Keymap::default(), |keymap, (key, action)| {
                    keymap.bind(key, action)
                })),
            Validation::Failure(violations) => Err(ConfigError::Invalid(violations)),
        }
    }

    fn capacity_check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        if self.history_capacity == 0 {
            Validation::fail(ConfigViolation::HistoryDisabled)
        } else if self.history_capacity > MAX_HISTORY_CAPACITY {
            Validation::fail(ConfigViolation::HistoryTooLarge {
                requested: self.history_capacity,
                max: MAX_HISTORY_CAPACITY,
            })
        } else {
            Validation::success(())
        }
    }

    /// Parse every extra binding, accumulating ALL bad entries.
    fn bindings(&self) -> Validation<Vec<(String, Action)>, NonEmptyVec<ConfigViolation>> {
        let parsed: Vec<Validation<(String, Action), NonEmptyVec<ConfigViolation>>> = self
            .keys
            .iter()
            .map(|(key, token)| {
                if key.trim().is_empty() {
                    return Validation::fail(ConfigViolation::EmptyKey);
                }
                match token.parse::<Action>() {
                    Ok(action) => Validation::success((key.clone(), action)),
                    Err(_) => Validation::fail(ConfigViolation::UnknownAction {
                        key: key.clone(),
                        action: token.clone(),
                    }),
                }
            })
            .collect();

        Validation::all_vec(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn empty_text_gives_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn parses_all_fields() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            theme = "dark"
            history_capacity = 16

            [keys]
            "x" = "*"
            "Delete" = "backspace"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.history_capacity, 16);
        assert_eq!(config.keys.len(), 2);
    }

    #[test]
    fn keymap_adds_extra_bindings_to_defaults() {
        let mut config = CalculatorConfig::default();
        config.keys.insert("x".to_string(), "*".to_string());

        let keymap = config.keymap().unwrap();
        assert_eq!(keymap.resolve("x"), Some(Action::Operator(Operator::Multiply)));
        assert_eq!(keymap.resolve("Enter"), Some(Action::Equals));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut config = CalculatorConfig {
            history_capacity: MAX_HISTORY_CAPACITY + 1,
            ..CalculatorConfig::default()
        };
        config.keys.insert(" ".to_string(), "clear".to_string());
        config.keys.insert("s".to_string(), "sqrt".to_string());

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::HistoryTooLarge { .. })));
                assert!(errors.iter().any(|e| matches!(e, ConfigViolation::EmptyKey)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::UnknownAction { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        let mut config = CalculatorConfig::default();
        config.keys.insert("c".to_string(), "clear".to_string());
        assert!(config.validate().is_success());
    }

    #[test]
    fn invalid_config_is_rejected_on_load() {
        let result = CalculatorConfig::from_toml_str(
            r#"
            [keys]
            "q" = "quit"
            "#,
        );

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(
                    violations.iter().cloned().collect::<Vec<_>>(),
                    vec![ConfigViolation::UnknownAction {
                        key: "q".to_string(),
                        action: "quit".to_string(),
                    }]
                );
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn zero_history_capacity_is_rejected() {
        let result = CalculatorConfig::from_toml_str("history_capacity = 0");

        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations.len(), 1);
                assert!(violations
                    .iter()
                    .all(|v| matches!(v, ConfigViolation::HistoryDisabled)));
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn maximum_history_capacity_is_accepted() {
        let config = CalculatorConfig {
            history_capacity: MAX_HISTORY_CAPACITY,
            ..CalculatorConfig::default()
        };
        assert!(config.validate().is_success());
    }

    #[test]
    fn keymap_reports_every_bad_binding() {
        let mut config = CalculatorConfig::default();
        config.keys.insert("q".to_string(), "quit".to_string());
        config.keys.insert("r".to_string(), "root".to_string());
        config.keys.insert("x".to_string(), "*".to_string());

        match config.keymap() {
            Err(ConfigError::Invalid(violations)) => assert_eq!(violations.len(), 2),
            other => panic!("Expected invalid bindings, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = CalculatorConfig::from_toml_str("theme = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = CalculatorConfig::from_toml_str("precision = 4");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_theme_is_a_parse_error() {
        let result = CalculatorConfig::from_toml_str("theme = \"sepia\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
