use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, NewUser},
};

pub struct CreateUserCommand {
    pub email: String,
    pub name: String,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        if command.email.trim().is_empty() || command.name.trim().is_empty() {
            return Err(ApplicationError::validation("email and name are required"));
        }

        let email = Email::new(command.email)?;
        let name = DisplayName::new(command.name)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "user with email {email} already exists"
            )));
        }

        let user = self.user_repo.insert(NewUser::new(email, name)).await?;
        tracing::info!(id = %user.id, email = %user.email, "user created");
        Ok(user.into())
    }
}
