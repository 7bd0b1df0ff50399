// src/application/ports/events.rs
use crate::domain::comment::CommentChangedEvent;
use async_trait::async_trait;

/// Result of a single publish attempt. Never an error: the caller only
/// observes it for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Delivered { bytes: usize },
    Dropped { reason: String },
}

impl PublishOutcome {
    pub fn dropped(reason: impl Into<String>) -> Self {
        Self::Dropped {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Best-effort change-event channel.
///
/// Implementations catch every internal failure (serialization, broker
/// connectivity, timeouts), report it through the log and return
/// [`PublishOutcome::Dropped`]. They must be safe to call from many requests
/// at once.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, topic: &str, key: &str, event: &CommentChangedEvent) -> PublishOutcome;
}
