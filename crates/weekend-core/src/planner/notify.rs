//! Pending notification for the caller to display.

use super::Planner;
use crate::storage::Storage;

impl<S: Storage> Planner<S> {
    /// Sets the pending message, replacing any message not yet dismissed.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    /// Clears the pending message.
    ///
    /// Timed auto-dismissal is the caller's job; the planner only keeps the
    /// latest message until told otherwise.
    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Returns and clears the pending message.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }
}
