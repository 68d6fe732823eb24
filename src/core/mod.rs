//! The pure arithmetic core.
//!
//! This module contains everything that decides what the calculator shows:
//! - Entry tokens (`Digit`, `Operator`) and the arithmetic itself
//! - The immutable `CalculatorState` and its action methods
//! - Phase tracking via the `State` trait and an immutable history
//!
//! Nothing in here logs, allocates shared state, or touches the outside world.

#[macro_use]
mod macros;

mod calculator;
mod digit;
mod error;
mod history;
mod number;
mod operator;
mod state;

pub use calculator::{CalculatorState, PendingOperation, Phase, DEFAULT_DISPLAY, ERROR_DISPLAY};
pub use digit::Digit;
pub use error::{ArithmeticError, InputError};
pub use history::{TransitionHistory, TransitionRecord};
pub use number::{parse, stringify};
pub use operator::{apply, Operator};
pub use state::State;
