//! Digit entry token.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single entry character: `0`-`9` or the decimal point.
///
/// The only way to build one is through [`Digit::new`] (or `TryFrom<char>`),
/// so a `Digit` is always a valid entry character.
///
/// # Example
///
/// ```rust
/// use keypad::core::Digit;
///
/// let seven = Digit::new('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new('x').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point.
    pub const POINT: Digit = Digit('.');

    /// Validate an entry character.
    pub fn new(c: char) -> Result<Self, InputError> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(InputError::InvalidDigit(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::new(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl FromStr for Digit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::new(c),
            _ => Err(InputError::InvalidDigitToken(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
