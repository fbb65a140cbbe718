//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait the page templates are
//! rendered through. The default implementation is [`MiniJinjaEngine`].

use minijinja::{Environment, Value};

use crate::error::RenderError;

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Renders a template string with the given data.
    ///
    /// This compiles and renders the template in one step. For repeated
    /// rendering of the same template, use [`add_template`](Self::add_template)
    /// and [`render_named`](Self::render_named).
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Adds a named template to the engine.
    ///
    /// Names ending in `.html` are rendered with HTML auto-escaping.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// # Example
///
/// ```rust
/// use folio_render::template::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render_template("Hello, {{ name }}!", &json!({ "name": "World" }))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_named_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("greet", "Hi {{ who }}").unwrap();
        assert!(engine.has_template("greet"));
        let out = engine.render_named("greet", &json!({ "who": "there" })).unwrap();
        assert_eq!(out, "Hi there");
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let engine = MiniJinjaEngine::new();
        assert!(!engine.has_template("nope"));
        let err = engine.render_named("nope", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[test]
    fn test_html_templates_escape() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("t.html", "<p>{{ text }}</p>").unwrap();
        let out = engine
            .render_named("t.html", &json!({ "text": "<b>x</b>" }))
            .unwrap();
        assert!(out.starts_with("<p>&lt;b&gt;x"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_syntax_error_is_template_error() {
        let mut engine = MiniJinjaEngine::new();
        let err = engine.add_template("bad", "{{ unclosed").unwrap_err();
        assert!(matches!(err, RenderError::TemplateError(_)));
    }
}
