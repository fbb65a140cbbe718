//! Theme preference and effective theme values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's stored theme choice.
///
/// `Auto` defers to the host's color-scheme signal at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the host color scheme.
    #[default]
    Auto,
}

impl ThemePreference {
    /// All preference values, in cycling order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::Auto,
    ];

    /// The lowercase token for this preference.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Auto => "auto",
        }
    }

    /// The next preference in `light -> dark -> auto -> light` order.
    pub fn cycle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Auto,
            ThemePreference::Auto => ThemePreference::Light,
        }
    }

    /// Returns the fixed theme for `light`/`dark`, or `None` for `auto`.
    pub fn fixed(self) -> Option<EffectiveTheme> {
        match self {
            ThemePreference::Light => Some(EffectiveTheme::Light),
            ThemePreference::Dark => Some(EffectiveTheme::Dark),
            ThemePreference::Auto => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    value: String,
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (expected light, dark or auto)",
            self.value
        )
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "auto" => Ok(ThemePreference::Auto),
            _ => Err(ParseThemeError {
                value: s.to_string(),
            }),
        }
    }
}

/// The concrete theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl EffectiveTheme {
    /// Both theme values.
    pub const ALL: [EffectiveTheme; 2] = [EffectiveTheme::Light, EffectiveTheme::Dark];

    /// The class token written to the document root.
    pub fn class_name(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }

    /// Maps a class token back to a theme.
    pub fn from_class(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.class_name() == token)
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
