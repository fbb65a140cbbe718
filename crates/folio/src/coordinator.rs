//! Theme coordinator.
//!
//! Keeps the document root's theme class in sync with the UI store's theme
//! preference. A resolution pass reads the preference, resolves it (querying
//! the host only for `auto`) and replaces the theme token on the root. Passes
//! run once at mount and then after every committed preference change.
//!
//! The coordinator owns the only writable handle to the root and hands out
//! read-only [`RootView`]s. After any pass the root carries exactly one of
//! `light` / `dark`.
//!
//! ```rust
//! use folio::coordinator::ThemeCoordinator;
//! use folio::ui::{UiAction, UiState, UiStore};
//! use folio_render::{DocumentRoot, EffectiveTheme, FixedColorScheme, ThemePreference};
//!
//! let ui = UiStore::new(UiState::default());
//! let coordinator = ThemeCoordinator::mount(
//!     &ui,
//!     DocumentRoot::new("en"),
//!     Some(Box::new(FixedColorScheme::dark())),
//! );
//! let root = coordinator.root().clone();
//!
//! assert_eq!(root.theme_class(), Some(EffectiveTheme::Dark));
//!
//! ui.dispatch(UiAction::SetTheme(ThemePreference::Light));
//! assert_eq!(root.theme_class(), Some(EffectiveTheme::Light));
//! assert_eq!(coordinator.effective_theme(), EffectiveTheme::Light);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use folio_render::{
    resolve_theme, ColorSchemeQuery, DocumentRoot, EffectiveTheme, RootView, SharedRoot,
    ThemePreference,
};

use crate::store::Subscription;
use crate::ui::UiStore;

/// State shared between the coordinator and its store listener.
///
/// Holds no store handle, so the listener does not keep the UI store alive.
struct Resolver {
    root: SharedRoot,
    host: Option<Box<dyn ColorSchemeQuery>>,
    observed: Cell<Option<ThemePreference>>,
    applied: Cell<EffectiveTheme>,
    passes: Cell<u64>,
}

impl Resolver {
    fn run(&self, preference: ThemePreference) -> EffectiveTheme {
        let theme = resolve_theme(preference, self.host.as_deref());
        self.root.borrow_mut().apply_theme(theme);

        self.observed.set(Some(preference));
        self.applied.set(theme);
        self.passes.set(self.passes.get() + 1);

        tracing::debug!(
            %preference,
            effective = %theme,
            pass = self.passes.get(),
            "applied theme to document root"
        );
        theme
    }
}

/// Synchronizes the document root's theme class with the UI store.
pub struct ThemeCoordinator {
    ui: UiStore,
    resolver: Rc<Resolver>,
    view: RootView,
    _subscription: Subscription,
}

impl ThemeCoordinator {
    /// Mounts the coordinator: takes ownership of `root`, runs the initial
    /// pass, then subscribes to preference changes.
    ///
    /// `host` is the color-scheme query used for `auto`. `None` means the
    /// host has no such capability, in which case `auto` resolves to light.
    pub fn mount(
        ui: &UiStore,
        root: DocumentRoot,
        host: Option<Box<dyn ColorSchemeQuery>>,
    ) -> Self {
        let root = root.into_shared();
        let view = RootView::new(&root);
        let resolver = Rc::new(Resolver {
            root,
            host,
            observed: Cell::new(None),
            applied: Cell::new(EffectiveTheme::Light),
            passes: Cell::new(0),
        });

        resolver.run(ui.select(|s| s.theme));

        let listener = Rc::clone(&resolver);
        let subscription = ui.subscribe(move |state| {
            // Other UI flags changing must not trigger a pass.
            if listener.observed.get() != Some(state.theme) {
                listener.run(state.theme);
            }
        });

        Self {
            ui: ui.clone(),
            resolver,
            view,
            _subscription: subscription,
        }
    }

    /// Runs a resolution pass against the current preference.
    ///
    /// Repeating it with unchanged inputs leaves the root unchanged.
    pub fn sync(&self) -> EffectiveTheme {
        let preference = self.ui.select(|s| s.theme);
        self.resolver.run(preference)
    }

    /// Re-resolves after the host's color scheme may have changed.
    ///
    /// Only `auto` depends on the host, so this is a no-op returning `None`
    /// for `light` and `dark`.
    pub fn host_changed(&self) -> Option<EffectiveTheme> {
        let preference = self.ui.select(|s| s.theme);
        if preference == ThemePreference::Auto {
            Some(self.resolver.run(preference))
        } else {
            None
        }
    }

    /// The theme applied by the most recent pass.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.resolver.applied.get()
    }

    /// The preference the most recent pass resolved.
    pub fn preference(&self) -> ThemePreference {
        self.resolver
            .observed
            .get()
            .unwrap_or_else(|| self.ui.select(|s| s.theme))
    }

    /// Number of passes run since mount, including the mount pass.
    pub fn passes(&self) -> u64 {
        self.resolver.passes.get()
    }

    /// Whether a host color-scheme query is available.
    pub fn has_host(&self) -> bool {
        self.resolver.host.is_some()
    }

    /// Read-only view of the document root this coordinator writes to.
    pub fn root(&self) -> &RootView {
        &self.view
    }
}

impl fmt::Debug for ThemeCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeCoordinator")
            .field("preference", &self.preference())
            .field("effective", &self.effective_theme())
            .field("has_host", &self.has_host())
            .field("passes", &self.passes())
            .finish()
    }
}
