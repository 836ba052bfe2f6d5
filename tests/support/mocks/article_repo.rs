// tests/support/mocks/article_repo.rs
use async_trait::async_trait;
use pressroom::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTitle, NewArticle,
};
use pressroom::domain::errors::{DomainError, DomainResult};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    articles: HashMap<i64, Article>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Inner>,
}

impl InMemoryArticleRepo {
    pub fn seed(&self, articles: impl IntoIterator<Item = Article>) {
        let mut inner = self.inner.lock().unwrap();
        for article in articles {
            let id = i64::from(article.id);
            inner.next_id = inner.next_id.max(id);
            inner.articles.insert(id, article);
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        inner.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, article: &Article) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(article.id);
        if !inner.articles.contains_key(&id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        inner.articles.insert(id, article.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .articles
            .get(&i64::from(id))
            .cloned())
    }

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .articles
            .values()
            .find(|article| &article.title == title)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        let mut articles: Vec<Article> = inner.articles.values().cloned().collect();
        articles.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(articles)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.lock().unwrap().articles.remove(&i64::from(id));
        Ok(())
    }
}
