use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient user-facing message (the toast of a graphical front-end).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
