// src/application/commands/comments/mod.rs
mod create;
mod notify;
mod service;
mod update;

pub use create::CreateCommentCommand;
pub use service::CommentCommandService;
pub use update::UpdateCommentCommand;
