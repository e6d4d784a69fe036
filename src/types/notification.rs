use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable message produced by the ingest pipeline for the
/// (external) toast layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(title: &str, message: String, kind: NotificationKind) -> Self {
        Self {
            title: title.to_string(),
            message,
            kind,
        }
    }
}
