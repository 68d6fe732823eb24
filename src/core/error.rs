//! Error types for the arithmetic core and its input tokens.

use thiserror::Error;

/// Errors produced by the arithmetic core.
///
/// These never reach a caller of the state machine: `operator` and
/// `equals` turn them into the `Error` display.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Errors that can occur when building input tokens from raw text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid digit '{0}', expected 0-9 or '.'")]
    InvalidDigit(char),

    #[error("Invalid digit token '{0}', expected a single character")]
    InvalidDigitToken(String),

    #[error("Unknown operator '{0}', expected one of + - * /")]
    UnknownOperator(String),

    #[error("Unknown action '{0}'")]
    UnknownAction(String),
}
