//! Transient notification banners.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// How long a notification stays up before it is dismissed.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// CSS class applied to the banner.
    pub fn css_class(&self) -> String {
        format!("alert-{}", self)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        };
        f.write_str(s)
    }
}

/// A message shown to the user until it expires.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: now,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Notifications currently on screen.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    active: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.active.push(notification);
    }

    /// Drop expired notifications and return how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|n| !n.is_expired(now));
        before - self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}
