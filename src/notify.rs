//! User-facing notifications (toasts) and the login redirect signal.

use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Where screens report outcomes.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    /// The session was rejected; the shell should show the login screen.
    fn redirect_to_login(&self);
}

/// Collects notifications for the front end to render.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: Mutex<Vec<Notification>>,
    login_requested: Mutex<bool>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    #[must_use]
    pub fn login_requested(&self) -> bool {
        *self.login_requested.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => info!("{}", notification.message),
            Level::Error => warn!("{}", notification.message),
        }
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }

    fn redirect_to_login(&self) {
        warn!("Redirecting to login");
        *self.login_requested.lock().unwrap_or_else(PoisonError::into_inner) = true;
    }
}
