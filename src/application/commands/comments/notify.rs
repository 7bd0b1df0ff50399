// src/application/commands/comments/notify.rs
use super::CommentCommandService;
use crate::{
    application::ports::events::PublishOutcome,
    domain::comment::{COMMENT_CHANGED_TOPIC, Comment, CommentAction, CommentChangedEvent},
};

impl CommentCommandService {
    /// Announce a persisted change. Whatever happens here, the write that
    /// preceded it stands: the outcome is logged and never returned.
    pub(super) async fn notify_changed(&self, action: CommentAction, comment: &Comment) {
        let event = CommentChangedEvent::new(action, comment, self.clock.now());

        match self
            .publisher
            .publish(COMMENT_CHANGED_TOPIC, event.key(), &event)
            .await
        {
            PublishOutcome::Delivered { bytes } => {
                tracing::debug!(
                    topic = COMMENT_CHANGED_TOPIC,
                    key = %comment.id,
                    action = action.as_str(),
                    bytes,
                    "change event published"
                );
            }
            PublishOutcome::Dropped { reason } => {
                tracing::warn!(
                    topic = COMMENT_CHANGED_TOPIC,
                    key = %comment.id,
                    action = action.as_str(),
                    %reason,
                    "change event dropped"
                );
            }
        }
    }
}
