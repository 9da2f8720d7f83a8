//! User-facing notifications emitted by the store.
//!
//! Notices are non-fatal and carry only what a toast needs: a level and a
//! human-readable message. The store queues them per operation; the UI
//! drains the queue with `TodoStore::take_notices` and owns the display.

/// Severity of a notice, mapping onto success/error toast styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single notification for the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
