use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Success => write!(f, "success"),
            Theme::Warning => write!(f, "warning"),
            Theme::Error => write!(f, "error"),
        }
    }
}

/// A transient, user-visible message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub theme: Theme,
    pub message: String,
    /// Display time in milliseconds; the surface's default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

impl Notification {
    pub fn new<S: Into<String>>(theme: Theme, message: S) -> Self {
        Self {
            theme,
            message: message.into(),
            delay: None,
        }
    }

    pub fn success<S: Into<String>>(message: S) -> Self {
        Self::new(Theme::Success, message)
    }

    pub fn warning<S: Into<String>>(message: S) -> Self {
        Self::new(Theme::Warning, message)
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::new(Theme::Error, message)
    }

    #[must_use]
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = Some(delay_ms);
        self
    }
}

/// Surface that displays notifications to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that only writes to the log
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.theme {
            Theme::Error => tracing::error!("{}", notification.message),
            Theme::Warning => tracing::warn!("{}", notification.message),
            Theme::Success => tracing::info!("{}", notification.message),
        }
    }
}
