// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{events::EventPublisher, ids::CommentIdGenerator, time::Clock},
    domain::comment::CommentRepository,
};

/// Write side of comments: validate, persist, then announce the change.
///
/// Holds no state of its own; everything durable lives in the repository.
pub struct CommentCommandService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) publisher: Arc<dyn EventPublisher>,
    pub(super) ids: Arc<dyn CommentIdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        repo: Arc<dyn CommentRepository>,
        publisher: Arc<dyn EventPublisher>,
        ids: Arc<dyn CommentIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            publisher,
            ids,
            clock,
        }
    }
}
