//! Toast notifications: at most one on screen, auto-dismissed.

use std::time::Duration;

pub const VISIBLE_FOR: Duration = Duration::from_millis(5000);
pub const SLIDE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Background colour of the toast.
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#2d8a5f",
            NotificationKind::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Lifecycle phase of the current toast, measured from when it was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    SlidingOut,
    Gone,
}

pub fn phase_at(elapsed: Duration) -> Phase {
    if elapsed < VISIBLE_FOR {
        Phase::Visible
    } else if elapsed < VISIBLE_FOR + SLIDE_OUT {
        Phase::SlidingOut
    } else {
        Phase::Gone
    }
}

/// Holds the single visible notification; showing a new one replaces the old.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`; returns the notification it replaced, if any.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> Option<Notification> {
        self.current.replace(Notification {
            message: message.into(),
            kind,
        })
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drops the current notification once its lifetime has run out.
    pub fn tick(&mut self, elapsed: Duration) {
        if phase_at(elapsed) == Phase::Gone {
            self.current = None;
        }
    }
}
