// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and persistence literals.

use serde::{Deserialize, Serialize};

/// The two theme modes the application supports.
///
/// Persisted as the literal strings `"light"` and `"dark"`. Dark is the
/// default on first run, and any unrecognized persisted value also resolves
/// to dark (see [`ThemeMode::from_persisted`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Maps a persisted string to a theme mode. Exactly the literal
    /// `"light"` means light; everything else means dark.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        if raw == "light" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// The literal written to the settings file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl From<ThemeMode> for iced::Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}
