// tests/support/mocks/mod.rs
mod article_repo;
mod clock;
mod security;
mod user_repo;

pub use article_repo::InMemoryArticleRepo;
pub use clock::FixedClock;
pub use security::{PlainPasswordHasher, StaticTokenManager};
pub use user_repo::InMemoryUserRepo;
