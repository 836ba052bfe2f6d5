// src/application/commands/articles/update.rs
use super::{MSG_NO_MODIFY_PERMISSION, MSG_TITLE_EXISTS};
use crate::application::{
    commands::required_fields,
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, ValidationErrors},
    ports::time::Clock,
};
use crate::domain::article::{
    ArticleContent, ArticleId, ArticleRepository, ArticleTitle,
    authorization::{can_modify_article, may_modify_articles},
    validator,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateArticlePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub actor: AuthenticatedUser,
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Command for UpdateArticleCommand {
    type Output = ();
}

impl UpdateArticleCommand {
    pub fn from_api(
        actor: AuthenticatedUser,
        article_id: i64,
        payload: UpdateArticlePayload,
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
            id: article_id,
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

pub struct UpdateArticleHandler {
    article_repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            article_repo,
            clock,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateArticleCommand> for UpdateArticleHandler {
    async fn handle(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        // Role check first, ownership check after the load. A reader is
        // refused before the lookup and never learns whether the id exists.
        let actor = command.actor.as_actor();
        if !may_modify_articles(Some(&actor)) {
            return Err(ApplicationError::forbidden(MSG_NO_MODIFY_PERMISSION));
        }

        let id = ArticleId::new(command.id)?;
        let mut article = self.article_repo.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("Article with id {id} not found"))
        })?;

        if !can_modify_article(Some(&actor), &article) {
            return Err(ApplicationError::forbidden(MSG_NO_MODIFY_PERMISSION));
        }

        let title = ArticleTitle::new(command.title)?;
        if title != article.title {
            if let Some(other) = self.article_repo.find_by_title(&title).await? {
                if other.id != article.id {
                    return Err(ApplicationError::conflict(MSG_TITLE_EXISTS));
                }
            }
        }

        let now = self.clock.now();
        article.set_title(title, now);
        article.set_content(ArticleContent::new(command.content)?, now);

        self.article_repo.update(&article).await?;
        Ok(())
    }
}
