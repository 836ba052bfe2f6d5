// src/application/commands/users/delete.rs
use super::MSG_NO_MANAGE_PERMISSION;
use crate::application::{
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{UserId, UserRepository, authorization::can_manage_users};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub actor: Option<AuthenticatedUser>,
    pub id: i64,
}

impl Command for DeleteUserCommand {
    type Output = ();
}

pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteUserCommand> for DeleteUserHandler {
    async fn handle(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let actor = command.actor.as_ref().map(AuthenticatedUser::as_actor);
        if !can_manage_users(actor.as_ref()) {
            return Err(ApplicationError::forbidden(MSG_NO_MANAGE_PERMISSION));
        }

        let id = UserId::new(command.id)?;
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "User with id {id} not found"
            )));
        }

        self.user_repo.delete(id).await?;
        Ok(())
    }
}
