//! Shell configuration.
//!
//! Everything the shell renders that is not runtime state lives here: page
//! language, typography, the adaptive palette, toaster defaults, metadata and
//! the initial UI state. Every field has a default, so a YAML file only needs
//! the values it changes. A `palette` section replaces the default palette
//! as a whole.
//!
//! ```yaml
//! lang: de
//! font:
//!   family: "IBM Plex Sans"
//! palette:
//!   background:
//!     light: "#fdfdfd"
//!     dark: "#111827"
//! initial:
//!   theme: dark
//! ```

use std::path::Path;

use folio_render::{EffectiveTheme, Palette};
use serde::Deserialize;

use crate::error::ShellError;
use crate::metadata::Metadata;
use crate::toast::ToastOptions;
use crate::ui::UiState;

/// Base typography.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Primary font family.
    pub family: String,
    /// Fallback stack appended after the family.
    pub fallback: String,
    /// Class added to `<html>` and `<body>` to apply the font.
    pub class_name: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            fallback: "system-ui, sans-serif".to_string(),
            class_name: "font-inter".to_string(),
        }
    }
}

impl FontConfig {
    /// The CSS `font-family` value.
    pub fn css_family(&self) -> String {
        let family = if self.family.contains(' ') {
            format!("\"{}\"", self.family)
        } else {
            self.family.clone()
        };
        if self.fallback.is_empty() {
            family
        } else {
            format!("{}, {}", family, self.fallback)
        }
    }
}

/// Complete shell configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// `lang` attribute of the page.
    pub lang: String,
    pub font: FontConfig,
    pub palette: Palette,
    pub toast: ToastOptions,
    pub metadata: Metadata,
    /// UI state the store starts with.
    pub initial: UiState,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            font: FontConfig::default(),
            palette: Palette::shell_default(),
            toast: ToastOptions::default(),
            metadata: Metadata::default(),
            initial: UiState::default(),
        }
    }
}

impl ShellConfig {
    /// Parses and validates configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ShellError> {
        let config: ShellConfig =
            serde_yaml::from_str(yaml).map_err(|e| ShellError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ShellError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content).map_err(|e| e.at_path(path))?;
        tracing::debug!(path = %path.display(), "loaded shell configuration");
        Ok(config)
    }

    /// Checks values that end up unescaped in the page.
    pub fn validate(&self) -> Result<(), ShellError> {
        let lang_ok = !self.lang.is_empty()
            && self
                .lang
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !lang_ok {
            return Err(ShellError::config(format!(
                "lang '{}' is not a language tag",
                self.lang
            )));
        }

        for (field, value) in [
            ("font.family", &self.font.family),
            ("font.fallback", &self.font.fallback),
        ] {
            if value.contains(&['<', '>', '{', '}', ';', '"'][..]) {
                return Err(ShellError::config(format!(
                    "{} contains characters not allowed in CSS: '{}'",
                    field, value
                )));
            }
        }
        if self.font.family.trim().is_empty() {
            return Err(ShellError::config("font.family must not be empty"));
        }

        let class = &self.font.class_name;
        let class_ok = !class.is_empty()
            && class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !class_ok || EffectiveTheme::from_class(class).is_some() {
            return Err(ShellError::config(format!(
                "font.class_name '{}' is not a usable class name",
                class
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::ThemePreference;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ShellConfig::from_yaml("{}").unwrap();
        assert_eq!(config.lang, "en");
        assert_eq!(config.font, FontConfig::default());
        assert_eq!(config.initial.theme, ThemePreference::Auto);
        assert_eq!(config.palette, Palette::shell_default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = ShellConfig::from_yaml(
            r##"
lang: de
font:
  family: IBM Plex Sans
palette:
  background:
    light: "#fdfdfd"
    dark: "#111827"
initial:
  theme: dark
toast:
  duration_ms: 3000
"##,
        )
        .unwrap();

        assert_eq!(config.lang, "de");
        assert_eq!(config.font.class_name, "font-inter");
        assert_eq!(config.initial.theme, ThemePreference::Dark);
        assert_eq!(config.toast.duration_ms, 3000);
        assert_eq!(
            config.palette.get("background", EffectiveTheme::Dark),
            Some("#111827")
        );
    }

    #[test]
    fn test_unknown_theme_is_config_error() {
        let err = ShellConfig::from_yaml("initial:\n  theme: sepia").unwrap_err();
        assert!(matches!(err, ShellError::Config { .. }));
    }

    #[test]
    fn test_rejects_theme_token_as_font_class() {
        let err = ShellConfig::from_yaml("font:\n  class_name: dark").unwrap_err();
        assert!(err.to_string().contains("class_name"));
    }

    #[test]
    fn test_rejects_css_breakout_in_font() {
        let err = ShellConfig::from_yaml("font:\n  family: \"x; } body { color: red\"").unwrap_err();
        assert!(err.to_string().contains("font.family"));
    }

    #[test]
    fn test_rejects_bad_lang() {
        assert!(ShellConfig::from_yaml("lang: \"en\\\" onload=\\\"x\"").is_err());
    }

    #[test]
    fn test_css_family_quotes_spaced_names() {
        let font = FontConfig {
            family: "IBM Plex Sans".into(),
            ..FontConfig::default()
        };
        assert_eq!(font.css_family(), "\"IBM Plex Sans\", system-ui, sans-serif");
        assert_eq!(FontConfig::default().css_family(), "Inter, system-ui, sans-serif");
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lang: \"\"").unwrap();

        let err = ShellConfig::from_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("lang"));
        assert!(message.contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = ShellConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }
}
