mod create;
mod delete;
mod service;
mod update;

pub use create::CreateUserCommand;
pub use delete::DeleteUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;

use crate::application::error::ApplicationError;
use crate::domain::user::UserId;

/// Ids that can never exist are reported the same way as ids that do not.
pub(crate) fn existing_user_id(raw: i64) -> Result<UserId, ApplicationError> {
    UserId::new(raw).map_err(|_| ApplicationError::not_found(format!("user {raw} not found")))
}
