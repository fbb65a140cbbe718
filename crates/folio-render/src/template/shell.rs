//! Page skeleton templates.
//!
//! The shell page is rendered in two pieces: the notification container
//! (`toaster.html`) and the document itself (`shell.html`), which embeds the
//! provider tree's markup and the container side by side inside `<body>`.
//!
//! Both templates auto-escape. Only the body markup, the palette CSS and the
//! already rendered toaster are inserted unescaped.

use serde::Serialize;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;

/// Template name of the page skeleton.
pub const SHELL_TEMPLATE_NAME: &str = "shell.html";

/// Template name of the notification container.
pub const TOASTER_TEMPLATE_NAME: &str = "toaster.html";

const SHELL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}" class="{{ root_class }}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<meta name="description" content="{{ description }}">
{% for author in authors %}
<meta name="author" content="{{ author }}">
{% endfor %}
{% if keywords %}
<meta name="keywords" content="{{ keywords | join(", ") }}">
{% endif %}
<style>
{{ palette_css | safe }}body {
  margin: 0;
  font-family: {{ font_family | safe }};
  background: var(--background);
  color: var(--foreground);
}
</style>
</head>
<body class="{{ body_class }}">
<div id="app">{{ body | safe }}</div>
{{ toaster | safe }}
</body>
</html>
"#;

const TOASTER_TEMPLATE: &str = r#"<div id="toaster" class="toaster toaster-{{ position }}" aria-live="polite" style="--toast-bg: {{ style.background }}; --toast-fg: {{ style.color }}; --toast-radius: {{ style.border_radius }}px; --toast-font-size: {{ style.font_size }}px">
{% for toast in toasts %}
<div class="toast toast-{{ toast.severity }}" role="status" data-id="{{ toast.id }}" data-duration="{{ toast.duration_ms }}" style="--toast-accent: {{ toast.accent }}">{{ toast.message }}</div>
{% endfor %}
</div>"#;

/// Escapes text for inclusion in HTML markup built outside the templates.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Everything the page skeleton needs, already resolved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShellDocument {
    /// `lang` attribute of `<html>`.
    pub lang: String,
    /// Class attribute of `<html>`, including the theme token.
    pub root_class: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// One `<meta name="author">` per entry.
    pub authors: Vec<String>,
    /// Joined into the keywords meta tag.
    pub keywords: Vec<String>,
    /// Palette CSS, trusted.
    pub palette_css: String,
    /// CSS `font-family` value, trusted.
    pub font_family: String,
    /// Class attribute of `<body>`.
    pub body_class: String,
    /// Markup produced by the provider tree, trusted.
    pub body: String,
    /// Rendered notification container, trusted.
    pub toaster: String,
}

/// The engine preloaded with the shell templates.
pub struct PageTemplates {
    engine: Box<dyn TemplateEngine>,
}

impl PageTemplates {
    /// Creates the default MiniJinja-backed templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_engine(Box::new(MiniJinjaEngine::new()))
    }

    /// Registers the shell templates on a custom engine.
    pub fn with_engine(mut engine: Box<dyn TemplateEngine>) -> Result<Self, RenderError> {
        engine.add_template(SHELL_TEMPLATE_NAME, SHELL_TEMPLATE)?;
        engine.add_template(TOASTER_TEMPLATE_NAME, TOASTER_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Renders the full page.
    pub fn render_page(&self, doc: &ShellDocument) -> Result<String, RenderError> {
        let data = serde_json::to_value(doc)?;
        self.engine.render_named(SHELL_TEMPLATE_NAME, &data)
    }

    /// Renders the notification container.
    ///
    /// `view` must serialize to an object with `position`, `style` and
    /// `toasts` fields.
    pub fn render_toaster<T: Serialize>(&self, view: &T) -> Result<String, RenderError> {
        let data = serde_json::to_value(view)?;
        self.engine.render_named(TOASTER_TEMPLATE_NAME, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ShellDocument {
        ShellDocument {
            lang: "en".into(),
            root_class: "font-inter dark".into(),
            title: "PDF Editor".into(),
            description: "Edit PDFs".into(),
            authors: vec!["Folio".into()],
            keywords: vec!["pdf".into(), "editor".into()],
            palette_css: ":root.dark {\n  --background: #0f172a;\n}\n".into(),
            font_family: "Inter, system-ui, sans-serif".into(),
            body_class: "font-inter".into(),
            body: "<main>pages</main>".into(),
            toaster: "<div id=\"toaster\"></div>".into(),
        }
    }

    #[test]
    fn test_render_page_skeleton() {
        let templates = PageTemplates::new().unwrap();
        let html = templates.render_page(&sample()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" class="font-inter dark">"#));
        assert!(html.contains("<title>PDF Editor</title>"));
        assert!(html.contains(r#"<meta name="keywords" content="pdf, editor">"#));
        assert!(html.contains("--background: #0f172a;"));
        assert!(html.contains(r#"<div id="app"><main>pages</main></div>"#));
    }

    #[test]
    fn test_toaster_is_sibling_of_app() {
        let templates = PageTemplates::new().unwrap();
        let html = templates.render_page(&sample()).unwrap();

        let app_end = html.find("</div>").unwrap();
        let toaster = html.find(r#"<div id="toaster">"#).unwrap();
        assert!(toaster > app_end);
    }

    #[test]
    fn test_title_is_escaped() {
        let templates = PageTemplates::new().unwrap();
        let mut doc = sample();
        doc.title = "<script>alert(1)</script>".into();
        let html = templates.render_page(&doc).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_toaster() {
        let templates = PageTemplates::new().unwrap();
        let html = templates
            .render_toaster(&json!({
                "position": "top-right",
                "style": { "background": "#363636", "color": "#fff", "border_radius": 8, "font_size": 14 },
                "toasts": [
                    { "id": 1, "severity": "success", "duration_ms": 4000, "accent": "#22c55e", "message": "Saved" }
                ]
            }))
            .unwrap();

        assert!(html.contains("toaster-top-right"));
        assert!(html.contains("--toast-bg: #363636"));
        assert!(html.contains(r#"class="toast toast-success""#));
        assert!(html.contains("--toast-accent: #22c55e"));
        assert!(html.contains(">Saved</div>"));
    }
}
