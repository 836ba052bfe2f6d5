// src/application/queries/users/get.rs
use super::MSG_NO_READ_PERMISSION;
use crate::application::{
    dispatch::{Query, QueryHandler},
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{UserId, UserRepository, authorization::can_read_users};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub actor: Option<AuthenticatedUser>,
    pub id: i64,
}

impl Query for GetUserQuery {
    type Output = UserDto;
}

pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl QueryHandler<GetUserQuery> for GetUserHandler {
    async fn handle(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let actor = query.actor.as_ref().map(AuthenticatedUser::as_actor);
        if !can_read_users(actor.as_ref()) {
            return Err(ApplicationError::forbidden(MSG_NO_READ_PERMISSION));
        }

        let id = UserId::new(query.id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("User with id {id} not found")))?;

        Ok(user.into())
    }
}
