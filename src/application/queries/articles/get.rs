// src/application/queries/articles/get.rs
use crate::application::{
    dispatch::{Query, QueryHandler},
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{ArticleId, ArticleRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Articles are public; no actor is needed to read one.
#[derive(Debug, Clone)]
pub struct GetArticleQuery {
    pub id: i64,
}

impl Query for GetArticleQuery {
    type Output = ArticleDto;
}

pub struct GetArticleHandler {
    article_repo: Arc<dyn ArticleRepository>,
}

impl GetArticleHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }
}

#[async_trait]
impl QueryHandler<GetArticleQuery> for GetArticleHandler {
    async fn handle(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self.article_repo.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!("Article with id {id} not found"))
        })?;

        Ok(article.into())
    }
}
