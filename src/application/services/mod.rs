// src/application/services/mod.rs
//
// Composition root for the application layer: every handler is registered
// here, once, at startup. The buses are immutable afterwards.

use crate::application::commands::articles::{
    CreateArticleCommand, CreateArticleHandler, DeleteArticleCommand, DeleteArticleHandler,
    UpdateArticleCommand, UpdateArticleHandler,
};
use crate::application::commands::users::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler, LoginUserCommand,
    LoginUserHandler, RegisterUserCommand, RegisterUserHandler, UpdateUserCommand,
    UpdateUserHandler,
};
use crate::application::dispatch::{CommandBus, QueryBus};
use crate::application::ports::security::{PasswordHasher, TokenManager};
use crate::application::ports::time::Clock;
use crate::application::queries::articles::{
    GetArticleHandler, GetArticleQuery, GetArticlesHandler, GetArticlesQuery,
};
use crate::application::queries::users::{
    GetUserHandler, GetUserQuery, GetUsersHandler, GetUsersQuery,
};
use crate::domain::article::ArticleRepository;
use crate::domain::user::UserRepository;
use std::sync::Arc;

pub struct ApplicationServices {
    command_bus: CommandBus,
    query_bus: QueryBus,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_repo: Arc<dyn ArticleRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let command_bus = CommandBus::builder()
            .register::<RegisterUserCommand, _>(RegisterUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
            ))
            .register::<LoginUserCommand, _>(LoginUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
                token_manager.clone(),
            ))
            .register::<CreateUserCommand, _>(CreateUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
            ))
            .register::<UpdateUserCommand, _>(UpdateUserHandler::new(user_repo.clone()))
            .register::<DeleteUserCommand, _>(DeleteUserHandler::new(user_repo.clone()))
            .register::<CreateArticleCommand, _>(CreateArticleHandler::new(
                article_repo.clone(),
                clock.clone(),
            ))
            .register::<UpdateArticleCommand, _>(UpdateArticleHandler::new(
                article_repo.clone(),
                clock.clone(),
            ))
            .register::<DeleteArticleCommand, _>(DeleteArticleHandler::new(article_repo.clone()))
            .build();

        let query_bus = QueryBus::builder()
            .register::<GetUserQuery, _>(GetUserHandler::new(user_repo.clone()))
            .register::<GetUsersQuery, _>(GetUsersHandler::new(user_repo))
            .register::<GetArticleQuery, _>(GetArticleHandler::new(article_repo.clone()))
            .register::<GetArticlesQuery, _>(GetArticlesHandler::new(article_repo))
            .build();

        Self {
            command_bus,
            query_bus,
            token_manager,
        }
    }

    pub fn command_bus(&self) -> &CommandBus {
        &self.command_bus
    }

    pub fn query_bus(&self) -> &QueryBus {
        &self.query_bus
    }

    pub fn token_manager(&self) -> &Arc<dyn TokenManager> {
        &self.token_manager
    }
}
