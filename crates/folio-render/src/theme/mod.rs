//! Theme preference, host detection and effective theme resolution.
//!
//! The user stores a [`ThemePreference`] (`light`, `dark` or `auto`). Rendering
//! always needs a concrete [`EffectiveTheme`]. [`resolve_theme`] bridges the two:
//!
//! | preference | host prefers dark | host prefers light | no host query |
//! |------------|-------------------|--------------------|---------------|
//! | `light`    | light             | light              | light         |
//! | `dark`     | dark              | dark               | dark          |
//! | `auto`     | dark              | light              | light         |
//!
//! `light` and `dark` are absorbing: the host is never queried for them.
//!
//! ## Host Detection
//!
//! [`ColorSchemeQuery`] abstracts the host signal. [`OsColorScheme`] asks the
//! operating system; [`FixedColorScheme`] and [`SharedColorScheme`] give fixed
//! or externally controlled answers for tests and embedders.
//!
//! ## Palettes
//!
//! [`Palette`] holds the CSS variables the shell emits for each mode, with
//! per-variable light/dark overrides.

mod host;
mod palette;
mod preference;
mod resolve;

pub use host::{ColorSchemeQuery, FixedColorScheme, OsColorScheme, SharedColorScheme};
pub use palette::Palette;
pub use preference::{EffectiveTheme, ParseThemeError, ThemePreference};
pub use resolve::resolve_theme;
