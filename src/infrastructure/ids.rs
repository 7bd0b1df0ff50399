use crate::application::ports::ids::CommentIdGenerator;
use uuid::Uuid;

/// Random (v4) UUIDs rendered in their hyphenated text form.
#[derive(Default, Clone)]
pub struct UuidCommentIdGenerator;

impl CommentIdGenerator for UuidCommentIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
