use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Error,
}

/// One toast-style message handed to the host UI. Rendering belongs to the
/// host; the core never reads anything back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind: NotificationKind::Info,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind: NotificationKind::Error,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outbound seam to whatever renders notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: emits notifications as log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info => info!(
                title = %notification.title,
                description = notification.description.as_deref().unwrap_or(""),
                "notification"
            ),
            NotificationKind::Error => error!(
                title = %notification.title,
                description = notification.description.as_deref().unwrap_or(""),
                "notification"
            ),
        }
    }
}
