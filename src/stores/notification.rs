use crate::config::NotificationConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// The single active banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
    /// Display time in milliseconds; `None` keeps it until closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Notification {
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(Duration::from_millis)
    }
}

/// Caller input for `show`/`error`/`warn`/`success`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    pub text: String,
    pub severity: Option<Severity>,
    pub duration: Option<Duration>,
}

impl NotificationPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl From<&str> for NotificationPayload {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for NotificationPayload {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Single-slot notification state. Each new notification replaces the
/// current one; nothing is queued.
#[derive(Clone)]
pub struct NotificationStore {
    state: Arc<watch::Sender<Option<Notification>>>,
    default_duration: Option<Duration>,
    error_duration: Option<Duration>,
}

impl NotificationStore {
    pub fn new(config: &NotificationConfig) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state: Arc::new(state),
            default_duration: config.default_duration(),
            error_duration: config.error_duration(),
        }
    }

    /// Display a notification; severity defaults to `Info`.
    pub fn show(&self, payload: impl Into<NotificationPayload>) {
        let payload = payload.into();
        let severity = payload.severity.unwrap_or_default();
        let fallback = if severity == Severity::Error {
            self.error_duration
        } else {
            self.default_duration
        };
        let duration = payload.duration.or(fallback);
        let notification = Notification {
            text: payload.text,
            severity,
            duration_ms: duration.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        };
        tracing::debug!(severity = %notification.severity, text = %notification.text, "notification.show");
        self.state.send_replace(Some(notification));
    }

    pub fn error(&self, payload: impl Into<NotificationPayload>) {
        self.show(payload.into().with_severity(Severity::Error));
    }

    pub fn warn(&self, payload: impl Into<NotificationPayload>) {
        self.show(payload.into().with_severity(Severity::Warning));
    }

    pub fn success(&self, payload: impl Into<NotificationPayload>) {
        self.show(payload.into().with_severity(Severity::Success));
    }

    /// Hide the active notification. Closing an empty slot does not wake
    /// subscribers.
    pub fn close_notification(&self) {
        self.state.send_if_modified(|current| current.take().is_some());
    }

    pub fn current(&self) -> Option<Notification> {
        self.state.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Receiver the rendering layer watches for banner changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.state.subscribe()
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}
