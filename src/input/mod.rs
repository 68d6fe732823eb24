//! Action dispatch adapters.
//!
//! On-screen controls and keyboard keys are both reduced to an [`Action`]
//! before they reach the state machine.

mod action;
mod keymap;

pub use action::Action;
pub use keymap::Keymap;
