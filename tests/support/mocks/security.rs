// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{Duration, Utc};
use pressroom::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use pressroom::application::error::{ApplicationError, ApplicationResult};
use pressroom::application::ports::security::{PasswordHasher, TokenManager};
use std::collections::HashMap;
use std::sync::Mutex;

/// Reversible stand-in for Argon2 so tests stay fast and deterministic.
pub struct PlainPasswordHasher;

impl PlainPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == Self::hash_of(password))
    }
}

/// Issues opaque tokens and remembers who they belong to.
#[derive(Default)]
pub struct StaticTokenManager {
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let token = format!("token-{}", i64::from(subject.user_id));
        let issued_at = Utc::now();
        let ttl = Duration::hours(1);

        self.issued.lock().unwrap().insert(
            token.clone(),
            AuthenticatedUser {
                id: subject.user_id,
                email: subject.email,
                role: subject.role,
            },
        );

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at: issued_at + ttl,
            expires_in: ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))
    }
}
