// tests/support/mocks/events.rs
use async_trait::async_trait;
use commentary_core::application::ports::events::{EventPublisher, PublishOutcome};
use commentary_core::domain::comment::CommentChangedEvent;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct PublishedEvent {
    pub topic: String,
    pub key: String,
    pub event: CommentChangedEvent,
}

/// Keeps every event it is handed and reports it as delivered.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<PublishedEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, topic: &str, key: &str, event: &CommentChangedEvent) -> PublishOutcome {
        let bytes = serde_json::to_vec(event).map(|v| v.len()).unwrap_or_default();
        self.events.lock().unwrap().push(PublishedEvent {
            topic: topic.to_string(),
            key: key.to_string(),
            event: event.clone(),
        });
        PublishOutcome::Delivered { bytes }
    }
}

/// Simulates an unreachable broker: every attempt is counted and dropped.
#[derive(Default)]
pub struct FailingPublisher {
    attempts: Mutex<u32>,
}

impl FailingPublisher {
    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _topic: &str, _key: &str, _event: &CommentChangedEvent) -> PublishOutcome {
        *self.attempts.lock().unwrap() += 1;
        PublishOutcome::dropped("broker unavailable")
    }
}
