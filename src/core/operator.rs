//! Binary operators and the arithmetic core.

use super::error::{ArithmeticError, InputError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four supported binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its ASCII symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply this operator to `lhs` and `rhs`.
    ///
    /// Division by zero (either signed zero) is the only failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad::core::{ArithmeticError, Operator};
    ///
    /// assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
    /// assert_eq!(
    ///     Operator::Divide.apply(1.0, 0.0),
    ///     Err(ArithmeticError::DivisionByZero)
    /// );
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(ArithmeticError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// Free-function form of [`Operator::apply`].
pub fn apply(lhs: f64, rhs: f64, op: Operator) -> Result<f64, ArithmeticError> {
    op.apply(lhs, rhs)
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| InputError::UnknownOperator(s.to_string()))
            }
            _ => Err(InputError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
