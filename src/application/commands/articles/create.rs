// src/application/commands/articles/create.rs
use super::MSG_TITLE_EXISTS;
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, ValidationErrors},
    ports::time::Clock,
};
use crate::domain::article::{
    ArticleContent, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
    authorization::can_create_article, validator,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateArticlePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub actor: AuthenticatedUser,
    pub title: String,
    pub content: String,
}

impl Command for CreateArticleCommand {
    type Output = ArticleId;
}

impl CreateArticleCommand {
    pub fn from_api(
        actor: AuthenticatedUser,
        payload: CreateArticlePayload,
    ) -> ApplicationResult<Self> {
        let [title, content] = required_fields([
            ("title", payload.title.as_deref()),
            ("content", payload.content.as_deref()),
        ])?;

        let mut errors = ValidationErrors::empty();
        if let Some(message) = validator::validate_title(title) {
            errors.insert("title", message);
        }
        if let Some(message) = validator::validate_content(content) {
            errors.insert("content", message);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            actor,
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

pub struct CreateArticleHandler {
    article_repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            article_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateArticleCommand> for CreateArticleHandler {
    async fn handle(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleId> {
        let actor = command.actor.as_actor();
        if !can_create_article(Some(&actor)) {
            return Err(ApplicationError::forbidden(
                "User has no permission to create articles",
            ));
        }

        let title = ArticleTitle::new(command.title)?;
        if self.article_repo.find_by_title(&title).await?.is_some() {
            return Err(ApplicationError::conflict(MSG_TITLE_EXISTS));
        }

        let content = ArticleContent::new(command.content)?;
        let article = self
            .article_repo
            .insert(NewArticle::new(title, content, actor.id, self.clock.now()))
            .await?;

        Ok(article.id)
    }
}
