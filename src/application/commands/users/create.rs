// src/application/commands/users/create.rs
use super::{MSG_NO_MANAGE_PERMISSION, MSG_USER_EXISTS};
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, ValidationErrors},
    ports::security::PasswordHasher,
};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, UserId, UserName, UserRepository,
    authorization::can_manage_users, validator,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Admin-facing user creation; unlike registration this is gated by
/// `can_manage_users` and has no first-admin rule.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub actor: Option<AuthenticatedUser>,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl Command for CreateUserCommand {
    type Output = UserId;
}

impl CreateUserCommand {
    pub fn from_api(
        actor: Option<AuthenticatedUser>,
        payload: CreateUserPayload,
    ) -> ApplicationResult<Self> {
        let [email, name, password, role] = required_fields([
            ("email", payload.email.as_deref()),
            ("name", payload.name.as_deref()),
            ("password", payload.password.as_deref()),
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
        if let Some(message) = validator::validate_password(password) {
            errors.insert("password", message);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            actor,
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            role: role.parse()?,
        })
    }
}

pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateUserCommand> for CreateUserHandler {
    async fn handle(&self, command: CreateUserCommand) -> ApplicationResult<UserId> {
        let actor = command.actor.as_ref().map(AuthenticatedUser::as_actor);
        if !can_manage_users(actor.as_ref()) {
            return Err(ApplicationError::forbidden(MSG_NO_MANAGE_PERMISSION));
        }

        let email = Email::new(command.email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict(MSG_USER_EXISTS));
        }

        let name = UserName::new(command.name)?;
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .user_repo
            .insert(NewUser::new(email, name, password_hash, command.role))
            .await?;

        Ok(user.id)
    }
}
