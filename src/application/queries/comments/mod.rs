mod list;
mod service;

pub use list::{ListCommentsQuery, SortOrder, paginate};
pub use service::CommentQueryService;
