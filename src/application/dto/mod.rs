pub mod comments;
pub mod serde_time;
pub mod users;

pub use comments::CommentDto;
pub use users::UserDto;
