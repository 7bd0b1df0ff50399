use super::{UserCommandService, existing_user_id};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{DisplayName, Email, UserUpdate},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl UserCommandService {
    /// Apply the provided fields. An update that carries no field returns the
    /// user unchanged.
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let user_id = existing_user_id(command.user_id)?;
        let not_found = || ApplicationError::not_found(format!("user {user_id} not found"));

        let existing = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(not_found)?;

        let mut update = UserUpdate::new(user_id);

        if let Some(email) = command.email.filter(|value| !value.trim().is_empty()) {
            let email = Email::new(email)?;
            if email != existing.email {
                if let Some(owner) = self.user_repo.find_by_email(&email).await? {
                    if owner.id != user_id {
                        return Err(ApplicationError::conflict(format!(
                            "user with email {email} already exists"
                        )));
                    }
                }
            }
            update = update.with_email(email);
        }

        if let Some(name) = command.name.filter(|value| !value.trim().is_empty()) {
            update = update.with_name(DisplayName::new(name)?);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let user = self.user_repo.update(update).await?.ok_or_else(not_found)?;
        Ok(user.into())
    }
}
