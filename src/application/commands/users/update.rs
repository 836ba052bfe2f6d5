// src/application/commands/users/update.rs
use super::{MSG_NO_MANAGE_PERMISSION, MSG_USER_EXISTS};
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, ValidationErrors},
};
use crate::domain::user::{
    Email, Role, UserId, UserName, UserRepository, authorization::can_manage_users, validator,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub actor: Option<AuthenticatedUser>,
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Command for UpdateUserCommand {
    type Output = ();
}

impl UpdateUserCommand {
    pub fn from_api(
        actor: Option<AuthenticatedUser>,
        user_id: i64,
        payload: UpdateUserPayload,
    ) -> ApplicationResult<Self> {
        let [email, name, role] = required_fields([
            ("email", payload.email.as_deref()),
            ("name", payload.name.as_deref()),
            ("role", payload.role.as_deref()),
        ])?;

        let mut errors = ValidationErrors::empty();
        if let Some(message) = validator::validate_email(email) {
            errors.insert("email", message);
        }
        if let Some(message) = validator::validate_name(name) {
            errors.insert("name", message);
        }
        if let Some(message) = validator::validate_role(role) {
            errors.insert("role", message);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            actor,
            id: user_id,
            email: email.to_string(),
            name: name.to_string(),
            role: role.parse()?,
        })
    }
}

pub struct UpdateUserHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateUserCommand> for UpdateUserHandler {
    async fn handle(&self, command: UpdateUserCommand) -> ApplicationResult<()> {
        // Authorization before existence: a forbidden caller learns nothing
        // about which user ids exist.
        let actor = command.actor.as_ref().map(AuthenticatedUser::as_actor);
        if !can_manage_users(actor.as_ref()) {
            return Err(ApplicationError::forbidden(MSG_NO_MANAGE_PERMISSION));
        }

        let id = UserId::new(command.id)?;
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with id {id} not found")))?;

        let email = Email::new(command.email)?;
        if email != user.email {
            if self.user_repo.find_by_email(&email).await?.is_some() {
                return Err(ApplicationError::conflict(MSG_USER_EXISTS));
            }
            user.set_email(email);
        }

        user.set_name(UserName::new(command.name)?);
        user.set_role(command.role);

        self.user_repo.update(&user).await?;
        Ok(())
    }
}
