// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, users::UserCommandService},
        ports::{events::EventPublisher, ids::CommentIdGenerator, time::Clock},
        queries::{comments::CommentQueryService, users::UserQueryService},
    },
    domain::{comment::CommentRepository, user::UserRepository},
};

/// Every use-case service, wired once at startup and shared by all requests.
pub struct ApplicationServices {
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        publisher: Arc<dyn EventPublisher>,
        ids: Arc<dyn CommentIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&publisher),
            Arc::clone(&ids),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            comment_commands,
            comment_queries,
            user_commands,
            user_queries,
        }
    }
}
