//! The closed action vocabulary.

use crate::core::{CalculatorState, Digit, InputError, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Everything a user can do to the calculator.
///
/// Pointer and keyboard adapters both produce an `Action`, and
/// [`Action::apply`] is the only route into the state machine, so the same
/// logical action behaves identically regardless of where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Action {
    /// Run this action against `state`, returning the next state.
    pub fn apply(&self, state: &CalculatorState) -> CalculatorState {
        match *self {
            Self::Digit(digit) => state.digit(digit),
            Self::Operator(operator) => state.operator(operator),
            Self::Equals => state.equals(),
            Self::Clear => state.clear(),
            Self::Backspace => state.backspace(),
        }
    }

    /// Resolve the label of an on-screen control.
    ///
    /// Accepts the ASCII symbols as well as the typographic ones keypads
    /// usually print (`×`, `÷`, `−`, `⌫`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad::core::Operator;
    /// use keypad::input::Action;
    ///
    /// assert_eq!(Action::from_label("÷"), Some(Action::Operator(Operator::Divide)));
    /// assert_eq!(Action::from_label("AC"), Some(Action::Clear));
    /// assert_eq!(Action::from_label("sin"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "=" => Some(Self::Equals),
            "C" | "AC" => Some(Self::Clear),
            "⌫" | "DEL" => Some(Self::Backspace),
            "×" => Some(Self::Operator(Operator::Multiply)),
            "÷" => Some(Self::Operator(Operator::Divide)),
            "−" => Some(Self::Operator(Operator::Subtract)),
            other => Self::from_symbol(other),
        }
    }

    /// Single-character digit or operator symbol.
    fn from_symbol(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if let Some(operator) = Operator::from_symbol(c) {
            return Some(Self::Operator(operator));
        }
        Digit::new(c).ok().map(Self::Digit)
    }

    /// Canonical token used in history, logs and configuration.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl From<Digit> for Action {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Action {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

impl FromStr for Action {
    type Err = InputError;

    /// Parse a canonical token: a digit, an operator symbol, `equals`,
    /// `clear` or `backspace` (case-insensitive for the words).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "equals" | "=" => Ok(Self::Equals),
            "clear" => Ok(Self::Clear),
            "backspace" => Ok(Self::Backspace),
            _ => Self::from_symbol(trimmed).ok_or_else(|| InputError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Equals => f.write_str("equals"),
            Self::Clear => f.write_str("clear"),
            Self::Backspace => f.write_str("backspace"),
        }
    }
}
