//! Error types for the shell.

use std::io;
use std::path::PathBuf;

use folio_render::RenderError;

/// Errors raised while configuring or rendering the shell.
///
/// A missing host color-scheme capability is not an error: `auto` falls back
/// to light.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Configuration could not be parsed or is invalid.
    #[error("invalid configuration{}: {message}", path_suffix(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// Page rendering failed.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Reading configuration from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            path: None,
            message: message.into(),
        }
    }

    /// Attach a file path to a configuration error.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Config { message, .. } => Self::Config {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ShellError::config("lang must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: lang must not be empty"
        );

        let err = err.at_path("folio.yaml");
        assert_eq!(
            err.to_string(),
            "invalid configuration in folio.yaml: lang must not be empty"
        );
    }

    #[test]
    fn test_from_render_error() {
        let err: ShellError = RenderError::TemplateNotFound("shell.html".into()).into();
        assert!(matches!(err, ShellError::Render(_)));
        assert!(err.to_string().contains("shell.html"));
    }
}
