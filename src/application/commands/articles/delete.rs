// src/application/commands/articles/delete.rs
use super::MSG_NO_MODIFY_PERMISSION;
use crate::application::{
    dispatch::{Command, CommandHandler},
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{
    ArticleId, ArticleRepository,
    authorization::{can_modify_article, may_modify_articles},
};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DeleteArticleCommand {
    pub actor: AuthenticatedUser,
    pub id: i64,
}

impl Command for DeleteArticleCommand {
    type Output = ();
}

pub struct DeleteArticleHandler {
    article_repo: Arc<dyn ArticleRepository>,
}

impl DeleteArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteArticleCommand> for DeleteArticleHandler {
    async fn handle(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let actor = command.actor.as_actor();
        if !may_modify_articles(Some(&actor)) {
            return Err(ApplicationError::forbidden(MSG_NO_MODIFY_PERMISSION));
        }

        let id = ArticleId::new(command.id)?;
        let article = self.article_repo.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("Article with id {id} not found"))
        })?;

        if !can_modify_article(Some(&actor), &article) {
            return Err(ApplicationError::forbidden(MSG_NO_MODIFY_PERMISSION));
        }

        self.article_repo.delete(id).await?;
        Ok(())
    }
}
