//! # Folio - PDF Editor Application Shell
//!
//! `folio` is the composition root of the Folio PDF editor. It wires global UI
//! state, document state and the visual theme together and renders the page
//! skeleton around them.
//!
//! ## Core Concepts
//!
//! - [`Store`](store::Store): reactive state handle with subscriptions, passed
//!   down explicitly instead of living in globals
//! - [`UiStore`](ui::UiStore): editor chrome state, the sole owner of the
//!   `light | dark | auto` theme preference
//! - [`PdfStore`](document::PdfStore): open document, edits and selection
//! - [`ThemeCoordinator`]: keeps the document root's theme class in sync with
//!   the preference and the host color scheme
//! - [`Providers`]: the fixed `UiState -> ThemeCoordinator -> DocumentState`
//!   nesting
//! - [`Shell`]: page skeleton, metadata, palette and the notification surface
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::ui::UiAction;
//! use folio::{Shell, ShellConfig};
//! use folio_render::{EffectiveTheme, FixedColorScheme, ThemePreference};
//!
//! let mut shell = Shell::new(ShellConfig::default(), Some(Box::new(FixedColorScheme::light()))).unwrap();
//! assert_eq!(shell.root().theme_class(), Some(EffectiveTheme::Light));
//!
//! shell.ui().dispatch(UiAction::SetTheme(ThemePreference::Dark));
//! assert_eq!(shell.root().theme_class(), Some(EffectiveTheme::Dark));
//!
//! let html = shell.render(|_scope| "<main></main>".to_string()).unwrap();
//! assert!(html.contains("class=\"font-inter dark\""));
//! ```
//!
//! ## Theme Resolution
//!
//! `light` and `dark` apply directly. `auto` asks the host once per pass; a
//! host with no color-scheme support resolves to light. After every pass the
//! root carries exactly one of the `light` / `dark` classes. See
//! [`folio_render::theme`] for the resolution table.

pub mod config;
pub mod coordinator;
pub mod document;
mod error;
pub mod logging;
pub mod metadata;
pub mod providers;
pub mod shell;
pub mod store;
pub mod toast;
pub mod ui;

pub use config::{FontConfig, ShellConfig};
pub use coordinator::ThemeCoordinator;
pub use error::ShellError;
pub use metadata::Metadata;
pub use providers::{ProviderScope, Providers};
pub use shell::Shell;
pub use toast::{Severity, ToastOptions, Toaster};

// Re-export the rendering crate for downstream users.
pub use folio_render;
