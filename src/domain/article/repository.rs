// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update(&self, article: &Article) -> DomainResult<()>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>>;

    async fn list(&self) -> DomainResult<Vec<Article>>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
