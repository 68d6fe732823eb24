//! Light/dark theme selection.
//!
//! The theme is presentation state only. It lives beside the calculator
//! state in the session and never feeds into arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme of the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

/// Colors a renderer needs, as hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    /// Used for the `Error` display.
    pub error: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#FFFBFE",
        surface: "#F3EDF7",
        text: "#1C1B1F",
        accent: "#6750A4",
        error: "#BA1A1A",
    };

    pub const DARK: Palette = Palette {
        background: "#1C1B1F",
        surface: "#2B2930",
        text: "#E6E1E5",
        accent: "#D0BCFF",
        error: "#FFB4AB",
    };
}
