//! Page rendering through MiniJinja.
//!
//! [`PageTemplates`] owns an engine preloaded with the shell skeleton and the
//! notification container. [`ShellDocument`] is the fully resolved input for
//! one page: nothing in the templates makes decisions beyond iteration over
//! metadata and toasts.

mod engine;
mod shell;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use shell::{escape_html, PageTemplates, ShellDocument, SHELL_TEMPLATE_NAME, TOASTER_TEMPLATE_NAME};
