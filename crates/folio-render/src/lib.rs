//! # Folio Render - Theme Resolution and Page Templates
//!
//! `folio-render` holds the rendering-side building blocks of the Folio PDF
//! editor shell:
//!
//! - [`ThemePreference`] / [`EffectiveTheme`]: the stored `light | dark | auto`
//!   choice and the concrete theme that gets applied
//! - [`ColorSchemeQuery`]: the host's "prefers dark" signal, with a real OS
//!   implementation and fixed implementations for tests
//! - [`resolve_theme`]: preference + host signal to effective theme
//! - [`DocumentRoot`]: the `<html>` element whose class list carries the theme
//! - [`Palette`]: CSS variables with per-mode overrides
//! - [`PageTemplates`]: the page skeleton and notification container templates
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_render::{resolve_theme, DocumentRoot, FixedColorScheme, ThemePreference};
//!
//! let host = FixedColorScheme::dark();
//! let mut root = DocumentRoot::default();
//!
//! root.apply_theme(resolve_theme(ThemePreference::Auto, Some(&host)));
//! assert_eq!(root.classes().to_string(), "dark");
//! ```
//!
//! The application side (state stores, the coordinator that keeps the root in
//! sync with the UI store, and the shell renderer) lives in the `folio` crate.

pub mod dom;
mod error;
pub mod template;
pub mod theme;

pub use error::RenderError;

pub use dom::{ClassList, DocumentRoot, RootView, SharedRoot};

pub use theme::{
    resolve_theme, ColorSchemeQuery, EffectiveTheme, FixedColorScheme, OsColorScheme, Palette,
    ParseThemeError, SharedColorScheme, ThemePreference,
};

pub use template::{escape_html, MiniJinjaEngine, PageTemplates, ShellDocument, TemplateEngine};
