//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::Notice;

/// Trait for receiving notices.
///
/// `notify()` must be fast and non-blocking. Failure to deliver a notice must
/// not affect the operation that produced it.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// No-op implementation for contexts that don't present notices.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notice: Notice) {}
}

/// Mock sink for testing - collects emitted notices.
#[derive(Clone, Default)]
pub struct MockNotificationSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notices.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Returns the titles of collected notices, oldest first.
    pub fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MockNotificationSink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpNotificationSink;
        sink.notify(Notice::info("Profile Updated", "saved"));
    }

    #[test]
    fn test_mock_sink_collects_notices() {
        let sink = MockNotificationSink::new();
        assert!(sink.is_empty());

        sink.notify(Notice::info("Itinerary Saved!", "saved"));
        sink.notify(Notice::destructive("Password Mismatch", "try again"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.titles(), vec!["Itinerary Saved!", "Password Mismatch"]);
        assert!(sink.notices()[1].is_destructive());
    }
}
