use serde_json::Value;
use tokio::sync::broadcast;
use wanderplan_core::notifications::{Notice, NotificationSink};

/// SSE event name carrying a [`Notice`].
pub const NOTICE: &str = "notice";

/// Serializable envelope that carries event names and optional payloads.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn with_payload(name: &'static str, payload: Value) -> Self {
        Self {
            name,
            payload: Some(payload),
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // No subscribers is not an error.
        let _ = self.sender.send(event);
    }
}

/// Publishes every notice emitted by the core services on the event bus.
pub struct WebNotificationSink {
    bus: EventBus,
}

impl WebNotificationSink {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl NotificationSink for WebNotificationSink {
    fn notify(&self, notice: Notice) {
        match serde_json::to_value(&notice) {
            Ok(payload) => {
                tracing::debug!("Publishing notice '{}'", notice.title);
                self.bus.publish(ServerEvent::with_payload(NOTICE, payload));
            }
            Err(err) => tracing::error!("Failed to serialize notice '{}': {}", notice.title, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notices_reach_subscribers() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let sink = WebNotificationSink::new(bus.clone());

        sink.notify(Notice::info("Itinerary Saved!", "saved"));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.name, NOTICE);
        let payload = event.payload.unwrap();
        assert_eq!(payload["title"], "Itinerary Saved!");
        assert_eq!(payload["variant"], "default");
    }

    #[test]
    fn publishing_without_subscribers_is_silent() {
        let bus = EventBus::new(8);
        WebNotificationSink::new(bus).notify(Notice::destructive("Password Mismatch", "x"));
    }
}
