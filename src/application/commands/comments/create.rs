// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::comment::{AuthorId, Comment, CommentAction, CommentId, CommentText, EntityId, EntityType},
};

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub entity_type: String,
    pub entity_id: String,
    pub author_id: String,
    pub text: String,
}

impl CommentCommandService {
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let CreateCommentCommand {
            entity_type,
            entity_id,
            author_id,
            text,
        } = command;

        let text = CommentText::new(text)?;
        let entity_type = EntityType::new(entity_type)?;
        let entity_id = EntityId::new(entity_id)?;
        let author_id = AuthorId::new(author_id)?;
        let id = CommentId::new(self.ids.next_id())?;
        let now = self.clock.now();

        let comment = Comment::create(id, entity_type, entity_id, author_id, text, now);
        let saved = self.repo.insert(comment).await?;

        self.notify_changed(CommentAction::Created, &saved).await;

        tracing::info!(
            id = %saved.id,
            entity = %saved.entity_key(),
            author = %saved.author_id,
            created_at = %saved.created_at.to_rfc3339(),
            "comment created"
        );

        Ok(saved.into())
    }
}
