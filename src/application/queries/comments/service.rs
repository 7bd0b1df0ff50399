use std::sync::Arc;

use crate::domain::comment::CommentRepository;

/// Read side of comments. Never publishes anything.
pub struct CommentQueryService {
    pub(super) repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }
}
