//! Host color-scheme detection.
//!
//! The host environment reports whether the user prefers a dark presentation.
//! [`ColorSchemeQuery`] abstracts that signal so resolution can run against the
//! real OS ([`OsColorScheme`]) or against a fixed answer in tests and embedders
//! ([`FixedColorScheme`], [`SharedColorScheme`]).
//!
//! A host with no color-scheme capability at all is represented by passing
//! `None` where an `Option<&dyn ColorSchemeQuery>` is expected.

use std::cell::Cell;
use std::rc::Rc;

use dark_light::Mode as OsThemeMode;

/// Synchronous query for the host's color-scheme preference.
pub trait ColorSchemeQuery {
    /// Returns `true` if the host reports a preference for dark presentation.
    fn prefers_dark(&self) -> bool;
}

// === Real implementation ===

/// Queries the operating system via the `dark-light` crate.
///
/// An unspecified OS preference, or a detection failure, reports light.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsColorScheme;

impl ColorSchemeQuery for OsColorScheme {
    fn prefers_dark(&self) -> bool {
        match dark_light::detect() {
            Ok(OsThemeMode::Dark) => true,
            Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => false,
            Err(err) => {
                tracing::warn!(error = %err, "OS color scheme detection failed, assuming light");
                false
            }
        }
    }
}

// === Fixed implementations ===

/// A host that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedColorScheme {
    dark: bool,
}

impl FixedColorScheme {
    /// Create a host reporting the given preference.
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// A host that prefers dark.
    pub fn dark() -> Self {
        Self::new(true)
    }

    /// A host that prefers light.
    pub fn light() -> Self {
        Self::new(false)
    }
}

impl ColorSchemeQuery for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// A host whose answer can be changed after it has been handed out.
///
/// Clones share the same underlying signal, so a test can keep one handle and
/// flip the OS preference seen by a coordinator holding another.
#[derive(Debug, Clone, Default)]
pub struct SharedColorScheme {
    dark: Rc<Cell<bool>>,
    queries: Rc<Cell<usize>>,
}

impl SharedColorScheme {
    /// Create a shared host with the given initial preference.
    pub fn new(dark: bool) -> Self {
        Self {
            dark: Rc::new(Cell::new(dark)),
            queries: Rc::new(Cell::new(0)),
        }
    }

    /// Change the reported preference.
    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }

    /// How many times the signal has been queried.
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl ColorSchemeQuery for SharedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.dark.get()
    }
}
