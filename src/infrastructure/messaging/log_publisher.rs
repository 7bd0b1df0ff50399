use crate::application::ports::events::{EventPublisher, PublishOutcome};
use crate::domain::comment::CommentChangedEvent;
use async_trait::async_trait;

/// Fallback channel when no broker is configured: the event goes to the log.
#[derive(Default, Clone)]
pub struct LogEventPublisher;

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish(&self, topic: &str, key: &str, event: &CommentChangedEvent) -> PublishOutcome {
        match serde_json::to_string(event) {
            Ok(payload) => {
                tracing::info!(topic, key, bytes = payload.len(), %payload, "change event");
                PublishOutcome::Delivered {
                    bytes: payload.len(),
                }
            }
            Err(err) => {
                tracing::warn!(topic, key, error = %err, "change event serialization failed");
                PublishOutcome::dropped(format!("serialization failed: {err}"))
            }
        }
    }
}
