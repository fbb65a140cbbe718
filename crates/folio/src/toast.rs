//! Notification surface.
//!
//! The [`Toaster`] is mounted next to the provider tree, not inside it, so
//! theme or document state changes never reset or re-render notifications.
//! It holds the queue of visible toasts and the fixed visual defaults:
//! top-right placement, 4 s lifetime, dark base style, and a green / red
//! accent for success / error.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default toast lifetime.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Accent color for success toasts.
pub const SUCCESS_ACCENT: &str = "#22c55e";
/// Accent color for error toasts.
pub const ERROR_ACCENT: &str = "#ef4444";

/// How important a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Where the toaster sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Base visual style shared by every toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastStyle {
    pub background: String,
    pub color: String,
    /// Corner rounding in pixels.
    pub border_radius: u8,
    /// Text size in pixels.
    pub font_size: u8,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            background: "#363636".to_string(),
            color: "#fff".to_string(),
            border_radius: 8,
            font_size: 14,
        }
    }
}

/// Toaster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    pub position: Position,
    /// Lifetime of a toast in milliseconds.
    pub duration_ms: u64,
    pub style: ToastStyle,
    pub success_accent: String,
    pub error_accent: String,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            style: ToastStyle::default(),
            success_accent: SUCCESS_ACCENT.to_string(),
            error_accent: ERROR_ACCENT.to_string(),
        }
    }
}

impl ToastOptions {
    /// Default lifetime as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Accent color for a severity. Info toasts use the base foreground.
    pub fn accent_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Success => &self.success_accent,
            Severity::Error => &self.error_accent,
            Severity::Info => &self.style.color,
        }
    }
}

/// Identifies a toast for dismissal.
pub type ToastId = u64;

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    /// Returns true once the toast's lifetime has passed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// The notification queue.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    options: ToastOptions,
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl Toaster {
    /// Creates an empty toaster.
    pub fn new(options: ToastOptions) -> Self {
        Self {
            options,
            toasts: Vec::new(),
            next_id: 1,
        }
    }

    /// The toaster's configuration.
    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    /// Shows a success toast with the default lifetime.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.show(Severity::Success, message)
    }

    /// Shows an error toast with the default lifetime.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.show(Severity::Error, message)
    }

    /// Shows an informational toast with the default lifetime.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.show(Severity::Info, message)
    }

    /// Shows a toast with the default lifetime.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) -> ToastId {
        let duration = self.options.duration();
        self.show_with(severity, message, duration)
    }

    /// Shows a toast with an explicit lifetime.
    pub fn show_with(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
    ) -> ToastId {
        self.show_at(severity, message, duration, Instant::now())
    }

    /// Shows a toast created at a specific instant.
    pub fn show_at(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        duration: Duration,
        created_at: Instant,
    ) -> ToastId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let message = message.into();
        tracing::debug!(id, ?severity, %message, "toast shown");
        self.toasts.push(Toast {
            id,
            severity,
            message,
            duration,
            created_at,
        });
        id
    }

    /// Removes a toast. Returns false if it was not showing.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Toasts still visible at `now`, oldest first.
    pub fn active_at(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| !t.is_expired(now))
    }

    /// Drops toasts that expired by `now`. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    /// Number of queued toasts, expired or not.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Serializable view of the toaster at `now`, for the page template.
    pub fn view(&self, now: Instant) -> ToasterView<'_> {
        ToasterView {
            position: self.options.position,
            style: &self.options.style,
            toasts: self
                .active_at(now)
                .map(|t| ToastView {
                    id: t.id,
                    severity: t.severity,
                    message: &t.message,
                    duration_ms: t.duration.as_millis() as u64,
                    accent: self.options.accent_for(t.severity),
                })
                .collect(),
        }
    }
}

/// Template input for the notification container.
#[derive(Debug, Serialize)]
pub struct ToasterView<'a> {
    pub position: Position,
    pub style: &'a ToastStyle,
    pub toasts: Vec<ToastView<'a>>,
}

/// Template input for one toast.
#[derive(Debug, Serialize)]
pub struct ToastView<'a> {
    pub id: ToastId,
    pub severity: Severity,
    pub message: &'a str,
    pub duration_ms: u64,
    pub accent: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ToastOptions::default();
        assert_eq!(options.position, Position::TopRight);
        assert_eq!(options.duration(), Duration::from_millis(4000));
        assert_eq!(options.style.background, "#363636");
        assert_eq!(options.style.color, "#fff");
        assert_eq!(options.style.border_radius, 8);
        assert_eq!(options.style.font_size, 14);
        assert_eq!(options.accent_for(Severity::Success), "#22c55e");
        assert_eq!(options.accent_for(Severity::Error), "#ef4444");
    }

    #[test]
    fn test_show_and_dismiss() {
        let mut toaster = Toaster::new(ToastOptions::default());
        let saved = toaster.success("Saved");
        let failed = toaster.error("Export failed");
        assert_ne!(saved, failed);
        assert_eq!(toaster.len(), 2);

        assert!(toaster.dismiss(saved));
        assert!(!toaster.dismiss(saved));
        assert_eq!(toaster.len(), 1);
    }

    #[test]
    fn test_expiry() {
        let mut toaster = Toaster::new(ToastOptions::default());
        let start = Instant::now();
        toaster.show_at(Severity::Info, "short", Duration::from_millis(100), start);
        toaster.show_at(Severity::Info, "long", DEFAULT_DURATION, start);

        let later = start + Duration::from_millis(500);
        let active: Vec<_> = toaster.active_at(later).map(|t| t.message.as_str()).collect();
        assert_eq!(active, vec!["long"]);

        assert_eq!(toaster.prune(later), 1);
        assert_eq!(toaster.prune(start + Duration::from_secs(5)), 1);
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_view_uses_accents() {
        let mut toaster = Toaster::new(ToastOptions::default());
        let now = Instant::now();
        toaster.show_at(Severity::Success, "ok", DEFAULT_DURATION, now);
        toaster.show_at(Severity::Error, "bad", DEFAULT_DURATION, now);

        let view = toaster.view(now);
        assert_eq!(view.toasts.len(), 2);
        assert_eq!(view.toasts[0].accent, SUCCESS_ACCENT);
        assert_eq!(view.toasts[1].accent, ERROR_ACCENT);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["position"], "top-right");
        assert_eq!(json["toasts"][0]["severity"], "success");
        assert_eq!(json["toasts"][0]["duration_ms"], 4000);
    }

    #[test]
    fn test_options_from_partial_yaml() {
        let options: ToastOptions = serde_yaml::from_str("duration_ms: 2500").unwrap();
        assert_eq!(options.duration(), Duration::from_millis(2500));
        assert_eq!(options.success_accent, SUCCESS_ACCENT);
    }
}
