//! The arithmetic entry state machine.
//!
//! [`CalculatorState`] is an immutable value. Every action is a pure method
//! that borrows the current state and returns the next one, so a sequence of
//! key presses is just a fold over actions.

use super::digit::Digit;
use super::number::{parse, stringify};
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// Display text shown after a division by zero.
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a freshly created or cleared calculator.
pub const DEFAULT_DISPLAY: &str = "0";

state_enum! {
    /// Coarse phase of a [`CalculatorState`], derived from its fields.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Typing a number with nothing pending.
        Entering,
        /// A left operand and operator are waiting for the right operand.
        OperatorPending,
        /// The last computation divided by zero.
        Error,
    }
    error: [Error]
}

/// Left operand and operator of an in-progress binary operation.
///
/// The two always appear and disappear together, so they share one
/// `Option` in [`CalculatorState`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// Complete state of the calculator widget.
///
/// # Example
///
/// ```rust
/// use keypad::core::{CalculatorState, Digit, Operator};
///
/// let digit = |c| Digit::new(c).unwrap();
///
/// let state = CalculatorState::new()
///     .digit(digit('2'))
///     .operator(Operator::Add)
///     .digit(digit('3'))
///     .operator(Operator::Multiply)
///     .digit(digit('4'))
///     .equals();
///
/// // Left to right, no precedence: (2 + 3) * 4
/// assert_eq!(state.display(), "20");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_fresh_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The default state: display `0`, nothing pending.
    pub fn new() -> Self {
        Self {
            display: DEFAULT_DISPLAY.to_string(),
            pending: None,
            awaiting_fresh_entry: false,
        }
    }

    /// The state entered after a division by zero.
    fn failed() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            pending: None,
            awaiting_fresh_entry: true,
        }
    }

    /// Text currently shown. Never empty.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit starts a new number instead of appending.
    pub fn is_awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    pub fn phase(&self) -> Phase {
        if self.display == ERROR_DISPLAY {
            Phase::Error
        } else if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Entering
        }
    }

    pub fn is_error(&self) -> bool {
        self.phase() == Phase::Error
    }

    /// Enter one digit or decimal point.
    ///
    /// A repeated decimal point is appended like any other character.
    pub fn digit(&self, digit: Digit) -> Self {
        let display = if self.awaiting_fresh_entry || self.display == DEFAULT_DISPLAY {
            digit.to_string()
        } else {
            let mut display = self.display.clone();
            display.push(digit.as_char());
            display
        };

        Self {
            display,
            pending: self.pending,
            awaiting_fresh_entry: false,
        }
    }

    /// Press a binary operator.
    ///
    /// With an operation already pending, it is evaluated first against the
    /// displayed value and the result becomes the new left operand.
    pub fn operator(&self, operator: Operator) -> Self {
        let input = parse(&self.display);

        let (display, operand) = match self.pending {
            None => (self.display.clone(), input),
            Some(pending) => match pending.operator.apply(pending.operand, input) {
                Ok(result) => (stringify(result), result),
                Err(_) => return Self::failed(),
            },
        };

        Self {
            display,
            pending: Some(PendingOperation { operand, operator }),
            awaiting_fresh_entry: true,
        }
    }

    /// Evaluate the pending operation, if any.
    ///
    /// With nothing pending this returns an equal state.
    pub fn equals(&self) -> Self {
        let Some(pending) = self.pending else {
            return self.clone();
        };

        match pending.operator.apply(pending.operand, parse(&self.display)) {
            Ok(result) => Self {
                display: stringify(result),
                pending: None,
                awaiting_fresh_entry: true,
            },
            Err(_) => Self::failed(),
        }
    }

    /// Reset to the default state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Remove the last displayed character, or show `0` when only one is left.
    pub fn backspace(&self) -> Self {
        let display = if self.display.chars().count() > 1 {
            let mut display = self.display.clone();
            display.pop();
            display
        } else {
            DEFAULT_DISPLAY.to_string()
        };

        Self {
            display,
            pending: self.pending,
            awaiting_fresh_entry: self.awaiting_fresh_entry,
        }
    }
}
