//! Document root model.
//!
//! [`DocumentRoot`] stands in for the page's `<html>` element: its `lang`
//! attribute and its class list. The theme class on the root is what every
//! descendant style keys off, so it is treated as a shared resource with a
//! single writer.
//!
//! Theme classes are replaced with [`DocumentRoot::apply_theme`], which removes
//! both theme tokens and adds exactly one in the same call. Everyone other
//! than the writer observes the root through a [`RootView`], which borrows it
//! only inside each accessor. Readers therefore never see both tokens or
//! neither once the first theme has been applied, and never hold a borrow
//! that would block the writer.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::theme::EffectiveTheme;

/// The writable, single-threaded handle to the document root.
pub type SharedRoot = Rc<RefCell<DocumentRoot>>;

/// An ordered set of class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token. Adding a token that is already present does nothing.
    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Removes a token. Removing an absent token does nothing.
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    /// Returns true if the token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Iterates over tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// The `<html>` element of the shell page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    lang: String,
    classes: ClassList,
}

impl DocumentRoot {
    /// Creates a root with the given language and no classes.
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            classes: ClassList::new(),
        }
    }

    /// Wraps the root in a writable shared handle.
    pub fn into_shared(self) -> SharedRoot {
        Rc::new(RefCell::new(self))
    }

    /// The `lang` attribute.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The class list.
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Adds a non-theme class (e.g. a font class).
    ///
    /// Theme tokens are rejected here; they may only change through
    /// [`apply_theme`](Self::apply_theme).
    pub fn add_class(&mut self, token: &str) {
        if EffectiveTheme::from_class(token).is_none() {
            self.classes.add(token);
        }
    }

    /// Replaces the theme token: removes both, then adds `theme`.
    pub fn apply_theme(&mut self, theme: EffectiveTheme) {
        for t in EffectiveTheme::ALL {
            self.classes.remove(t.class_name());
        }
        self.classes.add(theme.class_name());
    }

    /// The theme token currently on the root, if any.
    ///
    /// Returns `None` only before the first theme has been applied.
    pub fn theme_class(&self) -> Option<EffectiveTheme> {
        self.classes.iter().find_map(EffectiveTheme::from_class)
    }

    /// Number of theme tokens currently present.
    pub fn theme_token_count(&self) -> usize {
        self.classes
            .iter()
            .filter(|t| EffectiveTheme::from_class(t).is_some())
            .count()
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Read-only handle to a shared document root.
///
/// Accessors return owned values, so a view can be kept across store
/// dispatches without blocking the theme writer.
#[derive(Clone)]
pub struct RootView {
    root: SharedRoot,
}

impl RootView {
    /// Creates a view of `root`.
    pub fn new(root: &SharedRoot) -> Self {
        Self {
            root: Rc::clone(root),
        }
    }

    /// The theme token currently on the root, if any.
    pub fn theme_class(&self) -> Option<EffectiveTheme> {
        self.root.borrow().theme_class()
    }

    /// Number of theme tokens currently present.
    pub fn theme_token_count(&self) -> usize {
        self.root.borrow().theme_token_count()
    }

    /// The `lang` attribute.
    pub fn lang(&self) -> String {
        self.root.borrow().lang().to_string()
    }

    /// A copy of the current class list.
    pub fn classes(&self) -> ClassList {
        self.root.borrow().classes().clone()
    }

    /// A detached copy of the root. Changing it does not affect the page.
    pub fn snapshot(&self) -> DocumentRoot {
        self.root.borrow().clone()
    }
}

impl fmt::Debug for RootView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RootView").field(&*self.root.borrow()).finish()
    }
}
