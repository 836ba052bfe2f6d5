// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    // immutable after creation; there is deliberately no setter
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        self.title = title;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, content: ArticleContent, now: DateTime<Utc>) {
        self.content = content;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        content: ArticleContent,
        author_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}
