// src/application/ports/ids.rs
pub trait CommentIdGenerator: Send + Sync {
    /// A fresh, never-before-issued comment identifier.
    fn next_id(&self) -> String;
}
