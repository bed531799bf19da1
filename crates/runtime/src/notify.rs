//! Action notifications.
//!
//! The session emits exactly one notification per attempted action. Sinks
//! decide what to do with them: the tracing sink logs, the memory sink
//! collects for tests and polling UIs.

use std::sync::Mutex;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action changed state.
    Success,
    /// The action was accepted but changed nothing.
    Info,
    /// The action was rejected.
    Failure,
}

/// One user-facing message about an attempted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Receives session notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Sink that forwards notifications to the tracing infrastructure.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success | NotificationKind::Info => tracing::info!(
                title = %notification.title,
                detail = %notification.detail,
                "notification"
            ),
            NotificationKind::Failure => tracing::warn!(
                title = %notification.title,
                detail = %notification.detail,
                "notification"
            ),
        }
    }
}

/// Sink that buffers notifications in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all buffered notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Returns a copy of the most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        match self.entries.lock() {
            Ok(entries) => entries.last().cloned(),
            Err(poisoned) => poisoned.into_inner().last().cloned(),
        }
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_buffers_in_order() {
        let sink = MemorySink::new();
        sink.notify(Notification::new(NotificationKind::Success, "a", "first"));
        sink.notify(Notification::new(NotificationKind::Failure, "b", "second"));

        assert_eq!(sink.last().unwrap().title, "b");
        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].detail, "first");
        assert!(sink.drain().is_empty());
    }
}
