// src/application/commands/comments/update.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentAction, CommentId, CommentText},
};

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    pub comment_id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub new_text: String,
}

impl CommentCommandService {
    pub async fn update_comment(&self, command: UpdateCommentCommand) -> ApplicationResult<CommentDto> {
        let UpdateCommentCommand {
            comment_id,
            entity_type,
            entity_id,
            new_text,
        } = command;

        // Reject blank text before touching the store.
        CommentText::new(new_text.as_str())?;

        let id = CommentId::new(comment_id)
            .map_err(|_| ApplicationError::not_found("comment id is empty"))?;
        let mut comment = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("comment {id} not found")))?;

        comment.replace_text(new_text, self.clock.now())?;
        let updated = self.repo.update(comment).await?;

        self.notify_changed(CommentAction::Updated, &updated).await;

        tracing::info!(
            id = %updated.id,
            entity = %format!("{entity_type}:{entity_id}"),
            author = %updated.author_id,
            updated_at = %updated.updated_at.to_rfc3339(),
            "comment updated"
        );

        Ok(updated.into())
    }
}
