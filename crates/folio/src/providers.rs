//! Provider composition root.
//!
//! Providers are always nested as `UiState -> ThemeCoordinator -> DocumentState`:
//!
//! - the coordinator reads the theme preference, so it is built after (inside)
//!   the UI store;
//! - document editing UI must render under an already resolved theme, so the
//!   document store is built after (inside) the coordinator.
//!
//! [`Providers::compose`] is the only way to build the tree, which makes the
//! order fixed rather than a convention. Children receive a [`ProviderScope`]
//! exposing the stores and a read-only view of the resolved root.

use std::fmt;

use folio_render::{ColorSchemeQuery, DocumentRoot, EffectiveTheme, RootView, ThemePreference};

use crate::coordinator::ThemeCoordinator;
use crate::document::{PdfProvider, PdfStore};
use crate::ui::{UiProvider, UiState, UiStore};

/// The composed provider tree.
// Fields are declared innermost first so they drop in unmount order.
pub struct Providers {
    pdf: PdfProvider,
    theme: ThemeCoordinator,
    ui: UiProvider,
}

impl Providers {
    /// Builds the tree in its fixed order and runs the coordinator's mount
    /// pass before the document store exists.
    ///
    /// `root` is handed to the coordinator, which becomes its only writer.
    pub fn compose(
        initial: UiState,
        root: DocumentRoot,
        host: Option<Box<dyn ColorSchemeQuery>>,
    ) -> Self {
        let ui = UiProvider::new(initial);
        let theme = ThemeCoordinator::mount(ui.store(), root, host);
        let pdf = PdfProvider::new();

        tracing::debug!(
            preference = %theme.preference(),
            effective = %theme.effective_theme(),
            "providers composed"
        );

        Self { pdf, theme, ui }
    }

    /// Runs `children` inside the provider scope and returns what it produced.
    pub fn render<T>(&self, children: impl FnOnce(&ProviderScope<'_>) -> T) -> T {
        children(&self.scope())
    }

    /// The scope handed to children.
    pub fn scope(&self) -> ProviderScope<'_> {
        ProviderScope { providers: self }
    }

    /// The UI store.
    pub fn ui(&self) -> UiStore {
        self.ui.use_ui()
    }

    /// The theme coordinator.
    pub fn theme(&self) -> &ThemeCoordinator {
        &self.theme
    }

    /// The document store.
    pub fn pdf(&self) -> PdfStore {
        self.pdf.use_pdf()
    }

    /// Read-only view of the document root.
    pub fn root(&self) -> &RootView {
        self.theme.root()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers")
            .field("ui", &self.ui)
            .field("theme", &self.theme)
            .field("pdf", &self.pdf)
            .finish()
    }
}

/// What descendants of the provider tree can reach.
pub struct ProviderScope<'a> {
    providers: &'a Providers,
}

impl ProviderScope<'_> {
    /// The UI store.
    pub fn use_ui(&self) -> UiStore {
        self.providers.ui()
    }

    /// The document store.
    pub fn use_pdf(&self) -> PdfStore {
        self.providers.pdf()
    }

    /// The stored theme preference (may be `auto`).
    pub fn theme_preference(&self) -> ThemePreference {
        self.providers.ui.store().select(|s| s.theme)
    }

    /// The theme class currently on the document root. Never `auto`.
    pub fn root_theme(&self) -> EffectiveTheme {
        self.providers
            .root()
            .theme_class()
            .unwrap_or_else(|| self.providers.theme.effective_theme())
    }

    /// Read-only view of the document root. It holds no borrow, so it stays
    /// valid across dispatches made from the same scope.
    pub fn root(&self) -> &RootView {
        self.providers.root()
    }
}
