pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::Comment;
pub use events::{COMMENT_CHANGED_TOPIC, CommentAction, CommentChangedEvent, CommentSnapshot};
pub use repository::CommentRepository;
pub use value_objects::{AuthorId, CommentId, CommentText, EntityId, EntityType};
