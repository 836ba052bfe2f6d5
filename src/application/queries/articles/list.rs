// src/application/queries/articles/list.rs
use crate::application::{
    dispatch::{Query, QueryHandler},
    dto::ArticleDto,
    error::ApplicationResult,
};
use crate::domain::article::ArticleRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct GetArticlesQuery;

impl Query for GetArticlesQuery {
    type Output = Vec<ArticleDto>;
}

pub struct GetArticlesHandler {
    article_repo: Arc<dyn ArticleRepository>,
}

impl GetArticlesHandler {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }
}

#[async_trait]
impl QueryHandler<GetArticlesQuery> for GetArticlesHandler {
    async fn handle(&self, _query: GetArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.article_repo.list().await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
