// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and persistence glue.

use dark_light;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// The default for a fresh install.
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference. Only reachable by editing
    /// the config file; the in-app toggle flips between light and dark.
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The mode the theme toggle button switches to.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Maps the effective theme onto an Iced theme.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Label for the theme toggle button.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        }
    }
}
