//! User prompt surface and transient notifications.
//!
//! The stores never talk to a terminal or a document tree directly. The
//! hosting front-end injects a [`UserPrompt`] for the blocking dialogs
//! (destructive-action confirmation, validation alerts) and displays the
//! [`Notification`] values operations hand back.

use core::fmt;

/// Blocking prompt surface provided by the hosting front-end.
pub trait UserPrompt {
    /// Ask the user to confirm a destructive action. Returns `true` only
    /// when the user explicitly accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking message the user must acknowledge.
    fn alert(&self, message: &str);
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{label}")
    }
}

/// A transient, non-blocking acknowledgement message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text shown to the user.
    pub message: String,
    /// Display severity.
    pub level: NotificationLevel,
}

impl Notification {
    /// A success-level notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    /// An info-level notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
