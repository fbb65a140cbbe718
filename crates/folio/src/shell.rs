//! Shell renderer.
//!
//! The [`Shell`] owns the page skeleton: the document root (language, font
//! class, theme class), the provider tree, and the notification surface. The
//! toaster is a sibling of the provider tree, never a descendant. Every
//! render drops toasts that have expired.
//!
//! ```rust
//! use folio::{Shell, ShellConfig};
//! use folio_render::{FixedColorScheme, ThemePreference};
//!
//! let mut config = ShellConfig::default();
//! config.initial.theme = ThemePreference::Auto;
//!
//! let mut shell = Shell::new(config, Some(Box::new(FixedColorScheme::dark()))).unwrap();
//! let html = shell.render(|scope| format!("<main>{}</main>", scope.root_theme())).unwrap();
//!
//! assert!(html.contains(r#"<html lang="en" class="font-inter dark">"#));
//! assert!(html.contains("<main>dark</main>"));
//! ```

use std::time::Instant;

use folio_render::{ColorSchemeQuery, DocumentRoot, PageTemplates, RootView, ShellDocument};

use crate::config::ShellConfig;
use crate::document::PdfStore;
use crate::error::ShellError;
use crate::providers::{ProviderScope, Providers};
use crate::toast::Toaster;
use crate::ui::UiStore;

/// The application shell.
pub struct Shell {
    config: ShellConfig,
    providers: Providers,
    toaster: Toaster,
    templates: PageTemplates,
}

impl Shell {
    /// Builds the shell: document root, provider tree (which runs the theme
    /// coordinator's mount pass), toaster and templates.
    ///
    /// `host` is the color-scheme query for `auto`; `None` resolves `auto` to
    /// light.
    pub fn new(
        config: ShellConfig,
        host: Option<Box<dyn ColorSchemeQuery>>,
    ) -> Result<Self, ShellError> {
        config.validate()?;

        let mut root = DocumentRoot::new(config.lang.clone());
        root.add_class(&config.font.class_name);

        let providers = Providers::compose(config.initial.clone(), root, host);
        let toaster = Toaster::new(config.toast.clone());
        let templates = PageTemplates::new()?;

        tracing::info!(
            lang = %config.lang,
            theme = %providers.theme().effective_theme(),
            "shell mounted"
        );

        Ok(Self {
            config,
            providers,
            toaster,
            templates,
        })
    }

    /// Renders the page, with `body` producing the provider tree's markup.
    pub fn render<F>(&mut self, body: F) -> Result<String, ShellError>
    where
        F: FnOnce(&ProviderScope<'_>) -> String,
    {
        let markup = self.providers.render(body);
        self.page(markup, Instant::now())
    }

    /// Like [`render`](Self::render), for bodies that can fail. Errors from
    /// the body are returned unchanged.
    pub fn try_render<F>(&mut self, body: F) -> Result<String, ShellError>
    where
        F: FnOnce(&ProviderScope<'_>) -> Result<String, ShellError>,
    {
        let markup = self.providers.render(body)?;
        self.page(markup, Instant::now())
    }

    /// Renders the page as of `now`. Toasts expired by `now` are dropped.
    pub fn render_at<F>(&mut self, now: Instant, body: F) -> Result<String, ShellError>
    where
        F: FnOnce(&ProviderScope<'_>) -> String,
    {
        let markup = self.providers.render(body);
        self.page(markup, now)
    }

    fn page(&mut self, body: String, now: Instant) -> Result<String, ShellError> {
        let expired = self.toaster.prune(now);
        if expired > 0 {
            tracing::debug!(expired, "dropped expired toasts");
        }
        let toaster = self.templates.render_toaster(&self.toaster.view(now))?;

        let root = self.providers.root().snapshot();
        let metadata = &self.config.metadata;
        let doc = ShellDocument {
            lang: root.lang().to_string(),
            root_class: root.classes().to_string(),
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            authors: metadata.authors.clone(),
            keywords: metadata.keywords.clone(),
            palette_css: self.config.palette.to_css(),
            font_family: self.config.font.css_family(),
            body_class: self.config.font.class_name.clone(),
            body,
            toaster,
        };

        Ok(self.templates.render_page(&doc)?)
    }

    /// The configuration the shell was built with.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The provider tree.
    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    /// The UI store.
    pub fn ui(&self) -> UiStore {
        self.providers.ui()
    }

    /// The document store.
    pub fn pdf(&self) -> PdfStore {
        self.providers.pdf()
    }

    /// Read-only view of the document root.
    pub fn root(&self) -> &RootView {
        self.providers.root()
    }

    /// The notification surface.
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Mutable access to the notification surface.
    pub fn toaster_mut(&mut self) -> &mut Toaster {
        &mut self.toaster
    }
}
