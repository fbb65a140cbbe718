//! Effective theme resolution.

use super::host::ColorSchemeQuery;
use super::preference::{EffectiveTheme, ThemePreference};

/// Resolves a stored preference to the theme that should be applied.
///
/// `light` and `dark` are returned as-is and never touch the host. `auto`
/// queries the host once; a host without color-scheme support (`None`)
/// resolves to light.
///
/// # Example
///
/// ```rust
/// use folio_render::{resolve_theme, EffectiveTheme, FixedColorScheme, ThemePreference};
///
/// let host = FixedColorScheme::dark();
/// assert_eq!(resolve_theme(ThemePreference::Auto, Some(&host)), EffectiveTheme::Dark);
/// assert_eq!(resolve_theme(ThemePreference::Light, Some(&host)), EffectiveTheme::Light);
/// assert_eq!(resolve_theme(ThemePreference::Auto, None), EffectiveTheme::Light);
/// ```
pub fn resolve_theme(
    preference: ThemePreference,
    host: Option<&dyn ColorSchemeQuery>,
) -> EffectiveTheme {
    if let Some(fixed) = preference.fixed() {
        return fixed;
    }

    match host {
        Some(host) if host.prefers_dark() => EffectiveTheme::Dark,
        Some(_) => EffectiveTheme::Light,
        None => {
            tracing::debug!("no host color-scheme query available, auto resolves to light");
            EffectiveTheme::Light
        }
    }
}
