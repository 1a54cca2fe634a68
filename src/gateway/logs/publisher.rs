use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use tracing::info;
use crate::core::bookstore::BookstoreResult;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events as structured log lines
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: AtomicUsize,
}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> usize {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> BookstoreResult<()> {
        let json = serde_json::to_string(event)?;
        info!(event_id = %event.event_id, name = %event.name, key = %event.key,
            kind = ?event.kind, "domain event {}", json);
        self.published.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_events() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::added("users", "accounts", "alice", &"alice").expect("build event");
        publisher.publish(&event).await.expect("should publish event");
        publisher.publish(&event).await.expect("should publish event");
        assert_eq!(2, publisher.published());
    }
}
