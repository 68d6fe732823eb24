//! Keyboard bindings.

use super::action::Action;
use crate::core::{Digit, Operator};
use std::collections::HashMap;

/// Maps key names (as reported by the windowing layer, e.g. `"7"`,
/// `"Enter"`, `"Escape"`) to actions.
///
/// # Example
///
/// ```rust
/// use keypad::input::{Action, Keymap};
///
/// let keymap = Keymap::default();
/// assert_eq!(keymap.resolve("Enter"), Some(Action::Equals));
/// assert_eq!(keymap.resolve("Escape"), Some(Action::Clear));
/// assert_eq!(keymap.resolve("F1"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Default for Keymap {
    /// Digits, `.`, `+ - * /`, `Enter` and `=`, `Backspace`, `Escape`.
    fn default() -> Self {
        let mut keymap = Self::empty();
        for c in "0123456789.".chars() {
            if let Ok(digit) = Digit::new(c) {
                keymap = keymap.bind(c.to_string(), Action::Digit(digit));
            }
        }
        for operator in Operator::ALL {
            keymap = keymap.bind(operator.symbol().to_string(), Action::Operator(operator));
        }
        keymap
            .bind("Enter", Action::Equals)
            .bind("=", Action::Equals)
            .bind("Backspace", Action::Backspace)
            .bind("Escape", Action::Clear)
    }
}

impl Keymap {
    /// A keymap with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, replacing any existing binding.
    pub fn bind(mut self, key: impl Into<String>, action: Action) -> Self {
        self.bindings.insert(key.into(), action);
        self
    }

    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Keys bound to `action`, sorted.
    pub fn keys_for(&self, action: Action) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
