// src/application/queries/users/list.rs
use super::MSG_NO_READ_PERMISSION;
use crate::application::{
    dispatch::{Query, QueryHandler},
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{UserRepository, authorization::can_read_users};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GetUsersQuery {
    pub actor: Option<AuthenticatedUser>,
}

impl Query for GetUsersQuery {
    type Output = Vec<UserDto>;
}

pub struct GetUsersHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl QueryHandler<GetUsersQuery> for GetUsersHandler {
    async fn handle(&self, query: GetUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let actor = query.actor.as_ref().map(AuthenticatedUser::as_actor);
        if !can_read_users(actor.as_ref()) {
            return Err(ApplicationError::forbidden(MSG_NO_READ_PERMISSION));
        }

        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
