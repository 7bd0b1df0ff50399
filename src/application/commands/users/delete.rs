use super::{UserCommandService, existing_user_id};
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let user_id = existing_user_id(command.user_id)?;

        if !self.user_repo.delete(user_id).await? {
            return Err(ApplicationError::not_found(format!(
                "user {user_id} not found"
            )));
        }

        tracing::info!(id = %user_id, "user deleted");
        Ok(())
    }
}
