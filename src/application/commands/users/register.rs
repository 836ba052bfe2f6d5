// src/application/commands/users/register.rs
use super::MSG_USER_EXISTS;
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    error::{ApplicationError, ApplicationResult, ValidationErrors},
    ports::security::PasswordHasher,
};
use crate::domain::user::{
    Email, NewUser, PasswordHash, Role, UserId, UserName, UserRepository, validator,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterUserPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Unauthenticated self-registration. The admin bootstrap rule lives in the
/// handler, not here.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl Command for RegisterUserCommand {
    type Output = UserId;
}

impl RegisterUserCommand {
    pub fn from_api(payload: RegisterUserPayload) -> ApplicationResult<Self> {
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
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            role: role.parse()?,
        })
    }
}

pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterUserCommand> for RegisterUserHandler {
    async fn handle(&self, command: RegisterUserCommand) -> ApplicationResult<UserId> {
        // Only the very first admin may register itself; later admins are
        // created through the authenticated create-user path.
        if command.role == Role::Admin {
            let admins = self.user_repo.count_by_role(Role::Admin).await?;
            if admins > 0 {
                return Err(ApplicationError::forbidden(
                    "Only the first administrator can be registered, other administrators \
                     must be created by a logged-in administrator",
                ));
            }
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
