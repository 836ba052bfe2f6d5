// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use chrono::{DateTime, TimeZone, Utc};
use self::mocks::{
    FixedClock, InMemoryArticleRepo, InMemoryUserRepo, PlainPasswordHasher, StaticTokenManager,
};
use once_cell::sync::Lazy;
use pressroom::application::dto::AuthenticatedUser;
use pressroom::application::services::ApplicationServices;
use pressroom::domain::user::{Email, PasswordHash, Role, User, UserId, UserName};
use std::sync::Arc;

pub static FIXED_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

pub struct TestHarness {
    pub services: ApplicationServices,
    pub user_repo: Arc<InMemoryUserRepo>,
    pub article_repo: Arc<InMemoryArticleRepo>,
    pub clock: Arc<FixedClock>,
}

impl TestHarness {
    pub fn into_router(self) -> axum::Router {
        self.into_router_with_origins(&["*".to_string()])
    }

    pub fn into_router_with_origins(self, origins: &[String]) -> axum::Router {
        use pressroom::presentation::http::{routes::build_router, state::HttpState};

        build_router(
            HttpState {
                services: Arc::new(self.services),
            },
            origins,
        )
    }
}

pub fn harness() -> TestHarness {
    let user_repo = Arc::new(InMemoryUserRepo::default());
    let article_repo = Arc::new(InMemoryArticleRepo::default());
    let clock = Arc::new(FixedClock::new(*FIXED_TIME));

    let services = ApplicationServices::new(
        user_repo.clone(),
        article_repo.clone(),
        Arc::new(PlainPasswordHasher),
        Arc::new(StaticTokenManager::default()),
        clock.clone(),
    );

    TestHarness {
        services,
        user_repo,
        article_repo,
        clock,
    }
}

pub fn user(id: i64, email: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: Email::new(email).unwrap(),
        name: UserName::new("Test User").unwrap(),
        password_hash: PasswordHash::new(PlainPasswordHasher::hash_of("Secret1!pass")).unwrap(),
        role,
    }
}

pub fn actor(id: i64, email: &str, role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        email: email.to_string(),
        role,
    }
}
