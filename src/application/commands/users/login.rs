// src/application/commands/users/login.rs
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    dto::{LoginResultDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::{PasswordHasher, TokenManager},
};
use crate::domain::user::{Email, UserRepository, validator};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginUserPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl Command for LoginUserCommand {
    type Output = LoginResultDto;
}

impl LoginUserCommand {
    pub fn from_api(payload: LoginUserPayload) -> ApplicationResult<Self> {
        let [email, password] = required_fields([
            ("email", payload.email.as_deref()),
            ("password", payload.password.as_deref()),
        ])?;

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

pub struct LoginUserHandler {
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
}

impl LoginUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
        }
    }
}

#[async_trait]
impl CommandHandler<LoginUserCommand> for LoginUserHandler {
    async fn handle(&self, command: LoginUserCommand) -> ApplicationResult<LoginResultDto> {
        // A malformed address cannot match any account; reply exactly as a
        // wrong password would.
        if validator::validate_email(&command.email).is_some() {
            return Err(ApplicationError::unauthorized(MSG_INVALID_CREDENTIALS));
        }

        let email = Email::new(command.email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(MSG_INVALID_CREDENTIALS))?;

        let verified = self
            .password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;
        if !verified {
            return Err(ApplicationError::unauthorized(MSG_INVALID_CREDENTIALS));
        }

        let token = self.token_manager.issue(TokenSubject::from(&user)).await?;
        Ok(LoginResultDto {
            token,
            user: user.into(),
        })
    }
}
