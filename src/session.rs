//! The imperative shell around the pure core.
//!
//! A [`Calculator`] owns the current [`CalculatorState`], the active theme,
//! the keyboard bindings and a bounded history of dispatched actions. It is
//! what a presentation layer holds on to: forward every click or key press,
//! then re-render [`Calculator::display`].

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{CalculatorState, Phase, State, TransitionHistory, TransitionRecord};
use crate::input::{Action, Keymap};
use crate::theme::{Palette, Theme};
use chrono::Utc;
use tracing::{debug, info, trace, warn};

/// A live calculator widget session.
///
/// # Example
///
/// ```rust
/// use keypad::session::Calculator;
///
/// let mut calculator = Calculator::new();
/// for key in ["6", "/", "0", "Enter"] {
///     calculator.press_key(key);
/// }
/// assert_eq!(calculator.display(), "Error");
///
/// calculator.press_button("7");
/// assert_eq!(calculator.display(), "7");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    theme: Theme,
    keymap: Keymap,
    history: TransitionHistory<Phase>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A session with default configuration.
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        Self {
            state: CalculatorState::new(),
            theme: config.theme,
            keymap: Keymap::default(),
            history: TransitionHistory::with_capacity(config.history_capacity),
        }
    }

    /// A session using `config` for theme, history capacity and key bindings.
    pub fn with_config(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        config.check()?;
        let keymap = config.keymap()?;
        info!(theme = %config.theme, "Starting calculator session");
        Ok(Self {
            state: CalculatorState::new(),
            theme: config.theme,
            keymap,
            history: TransitionHistory::with_capacity(config.history_capacity),
        })
    }

    /// Apply `action` and record it.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let from = self.state.phase();
        let next = action.apply(&self.state);
        let to = next.phase();

        debug!(
            action = %action,
            from = from.name(),
            to = to.name(),
            display = next.display(),
            "Dispatched calculator action"
        );
        if to.is_error() && !from.is_error() {
            warn!(action = %action, "Division by zero");
        }

        self.history.push(TransitionRecord {
            from,
            to,
            action: action.token(),
            display: next.display().to_string(),
            timestamp: Utc::now(),
        });
        self.state = next;
        &self.state
    }

    /// Keyboard adapter. Unbound keys are ignored and return `None`.
    pub fn press_key(&mut self, key: &str) -> Option<&CalculatorState> {
        match self.keymap.resolve(key) {
            Some(action) => Some(self.dispatch(action)),
            None => {
                trace!(key, "Ignoring unbound key");
                None
            }
        }
    }

    /// Pointer adapter for on-screen controls. Unknown labels are ignored
    /// and return `None`.
    pub fn press_button(&mut self, label: &str) -> Option<&CalculatorState> {
        match Action::from_label(label) {
            Some(action) => Some(self.dispatch(action)),
            None => {
                trace!(label, "Ignoring unknown button");
                None
            }
        }
    }

    pub fn display(&self) -> &str {
        self.state.display()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &TransitionHistory<Phase> {
        &self.history
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Toggled theme");
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}
