//! Adaptive color palettes for the shell.
//!
//! A [`Palette`] is a named set of CSS custom properties. Each variable has a
//! base value and optional light/dark overrides, so only the values that
//! actually differ between modes need to be written twice.
//!
//! ```yaml
//! # Shared across both modes
//! accent: "#2563eb"
//!
//! # Mode-specific overrides
//! background:
//!   light: "#ffffff"
//!   dark: "#0f172a"
//! ```
//!
//! Resolving for a mode starts from the base value and replaces it with the
//! mode override when one exists.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Deserializer};

use super::preference::EffectiveTheme;
use crate::error::RenderError;

/// A collection of CSS variables that adapt to the effective theme.
///
/// # Example
///
/// ```rust
/// use folio_render::{EffectiveTheme, Palette};
///
/// let palette = Palette::new()
///     .add("accent", "#2563eb")
///     .add_adaptive("background", "#ffffff", None, Some("#0f172a"));
///
/// assert_eq!(palette.get("background", EffectiveTheme::Dark), Some("#0f172a"));
/// assert_eq!(palette.get("background", EffectiveTheme::Light), Some("#ffffff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Base values (always populated).
    base: BTreeMap<String, String>,
    /// Light mode overrides.
    light: BTreeMap<String, String>,
    /// Dark mode overrides.
    dark: BTreeMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The palette the shell uses when no configuration overrides it.
    pub fn shell_default() -> Self {
        Self::new()
            .add_adaptive("background", "#ffffff", None, Some("#0f172a"))
            .add_adaptive("foreground", "#0f172a", None, Some("#f8fafc"))
            .add_adaptive("muted", "#64748b", None, Some("#94a3b8"))
            .add_adaptive("border", "#e2e8f0", None, Some("#1e293b"))
            .add("accent", "#2563eb")
    }

    /// Parses a palette from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PaletteError`] for malformed YAML, invalid
    /// variable names, unsafe values, or entries with no value at all.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let entries: BTreeMap<String, PaletteEntry> = serde_yaml::from_str(yaml)?;
        Self::from_entries(entries).map_err(RenderError::PaletteError)
    }

    /// Adds a variable shared by both modes.
    pub fn add(mut self, name: &str, value: &str) -> Self {
        self.base.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds a variable with optional light and dark overrides.
    pub fn add_adaptive(
        mut self,
        name: &str,
        base: &str,
        light: Option<&str>,
        dark: Option<&str>,
    ) -> Self {
        self.base.insert(name.to_string(), base.to_string());
        if let Some(light) = light {
            self.light.insert(name.to_string(), light.to_string());
        }
        if let Some(dark) = dark {
            self.dark.insert(name.to_string(), dark.to_string());
        }
        self
    }

    /// Resolves every variable for the given mode.
    pub fn resolve(&self, mode: EffectiveTheme) -> BTreeMap<String, String> {
        let overrides = self.overrides(mode);
        self.base
            .iter()
            .map(|(name, base)| {
                let value = overrides.get(name).unwrap_or(base);
                (name.clone(), value.clone())
            })
            .collect()
    }

    /// Resolves a single variable for the given mode.
    pub fn get(&self, name: &str, mode: EffectiveTheme) -> Option<&str> {
        self.overrides(mode)
            .get(name)
            .or_else(|| self.base.get(name))
            .map(String::as_str)
    }

    /// Returns true if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Returns the number of defined variables.
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Renders one `:root.<mode>` block per theme.
    ///
    /// Both blocks are always emitted; the class on the document root picks
    /// which one applies.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for mode in EffectiveTheme::ALL {
            let _ = writeln!(css, ":root.{} {{", mode.class_name());
            let _ = writeln!(css, "  color-scheme: {};", mode.class_name());
            for (name, value) in self.resolve(mode) {
                let _ = writeln!(css, "  --{}: {};", name, value);
            }
            css.push_str("}\n");
        }
        css
    }

    fn overrides(&self, mode: EffectiveTheme) -> &BTreeMap<String, String> {
        match mode {
            EffectiveTheme::Light => &self.light,
            EffectiveTheme::Dark => &self.dark,
        }
    }

    fn from_entries(entries: BTreeMap<String, PaletteEntry>) -> Result<Self, String> {
        let mut palette = Palette::new();
        for (name, entry) in entries {
            validate_name(&name)?;
            match entry {
                PaletteEntry::Shared(value) => {
                    validate_value(&name, &value)?;
                    palette = palette.add(&name, &value);
                }
                PaletteEntry::Adaptive { base, light, dark } => {
                    for value in [&base, &light, &dark].into_iter().flatten() {
                        validate_value(&name, value)?;
                    }
                    let base = base
                        .as_deref()
                        .or(light.as_deref())
                        .or(dark.as_deref())
                        .ok_or_else(|| format!("variable '{}' has no value", name))?
                        .to_string();
                    palette = palette.add_adaptive(&name, &base, light.as_deref(), dark.as_deref());
                }
            }
        }
        Ok(palette)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, PaletteEntry>::deserialize(deserializer)?;
        Palette::from_entries(entries).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteEntry {
    Shared(String),
    Adaptive {
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        light: Option<String>,
        #[serde(default)]
        dark: Option<String>,
    },
}

fn validate_name(name: &str) -> Result<(), String> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(format!(
            "invalid variable name '{}' (use lowercase letters, digits and '-')",
            name
        ))
    }
}

fn validate_value(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() || value.contains(&[';', '{', '}', '<', '>'][..]) {
        Err(format!("invalid value '{}' for variable '{}'", value, name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_override_then_base() {
        let palette = Palette::new()
            .add("accent", "#2563eb")
            .add_adaptive("background", "#ffffff", None, Some("#0f172a"));

        let dark = palette.resolve(EffectiveTheme::Dark);
        assert_eq!(dark["background"], "#0f172a");
        assert_eq!(dark["accent"], "#2563eb");

        let light = palette.resolve(EffectiveTheme::Light);
        assert_eq!(light["background"], "#ffffff");
    }

    #[test]
    fn test_from_yaml_shared_and_adaptive() {
        let palette = Palette::from_yaml(
            r##"
accent: "#2563eb"
background:
  light: "#fafafa"
  dark: "#111111"
"##,
        )
        .unwrap();

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("background", EffectiveTheme::Light), Some("#fafafa"));
        assert_eq!(palette.get("background", EffectiveTheme::Dark), Some("#111111"));
        assert_eq!(palette.get("accent", EffectiveTheme::Dark), Some("#2563eb"));
    }

    #[test]
    fn test_from_yaml_rejects_empty_entry() {
        let err = Palette::from_yaml("background: {}").unwrap_err();
        assert!(err.to_string().contains("background"));
    }

    #[test]
    fn test_from_yaml_rejects_bad_name() {
        let err = Palette::from_yaml(r##""Back Ground": "#fff""##).unwrap_err();
        assert!(matches!(err, RenderError::PaletteError(_)));
    }

    #[test]
    fn test_from_yaml_rejects_css_injection() {
        let err = Palette::from_yaml(r#"background: "red; } body { display: none""#).unwrap_err();
        assert!(matches!(err, RenderError::PaletteError(_)));
    }

    #[test]
    fn test_to_css_emits_both_modes() {
        let css = Palette::shell_default().to_css();
        assert!(css.contains(":root.light {"));
        assert!(css.contains(":root.dark {"));
        assert!(css.contains("--background: #ffffff;"));
        assert!(css.contains("--background: #0f172a;"));
        assert!(css.contains("color-scheme: dark;"));
    }

    #[test]
    fn test_deserialize_inside_struct() {
        #[derive(Deserialize)]
        struct Wrapper {
            palette: Palette,
        }

        let wrapper: Wrapper = serde_yaml::from_str(
            r##"
palette:
  background:
    base: "#ffffff"
    dark: "#000000"
"##,
        )
        .unwrap();
        assert_eq!(
            wrapper.palette.get("background", EffectiveTheme::Dark),
            Some("#000000")
        );
    }
}
