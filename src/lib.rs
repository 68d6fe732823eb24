//! Keypad: a pure functional arithmetic entry state machine
//!
//! Keypad drives a four-function calculator widget. It follows the
//! "pure core, imperative shell" shape: the core is one immutable
//! [`CalculatorState`] transformed by pure action methods, while the
//! [`Calculator`](session::Calculator) shell owns the live state, logs, and
//! keeps a history of what was pressed.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the display, the pending operation
//!   and the fresh-entry flag
//! - **Actions**: digits, operators, equals, clear and backspace, whether
//!   they come from a button or a key
//! - **Phases**: `Entering`, `OperatorPending`, `Error`, tracked in an
//!   immutable history
//!
//! Operators evaluate strictly left to right; there is no precedence.
//!
//! # Example
//!
//! ```rust
//! use keypad::core::CalculatorState;
//! use keypad::input::Action;
//!
//! let actions = ["2", "+", "3", "*", "4", "="]
//!     .iter()
//!     .filter_map(|label| Action::from_label(label));
//!
//! let state = actions.fold(CalculatorState::new(), |state, action| action.apply(&state));
//! assert_eq!(state.display(), "20");
//! ```

pub mod config;
pub mod core;
pub mod input;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use crate::config::CalculatorConfig;
pub use crate::core::{CalculatorState, Digit, Operator, Phase, State};
pub use crate::input::{Action, Keymap};
pub use crate::session::Calculator;
pub use crate::theme::Theme;
