// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    email: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// HS256-signed bearer tokens. The secret comes from configuration; the
/// issued-at and expiry instants come from the injected clock so tests can
/// pin them.
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            clock,
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: i64::from(subject.user_id),
            email: subject.email,
            role: subject.role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at: Utc
                .timestamp_opt(claims.iat, 0)
                .single()
                .unwrap_or(issued_at),
            expires_at: Utc
                .timestamp_opt(claims.exp, 0)
                .single()
                .unwrap_or(expires_at),
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        // Expiry is checked against the injected clock, not system time, so
        // tests can pin the instant. Signature validation stays with the
        // library.
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        let claims = data.claims;
        if claims.exp <= self.clock.now().timestamp() {
            return Err(ApplicationError::unauthorized("invalid or expired token"));
        }
        Ok(AuthenticatedUser {
            id: UserId::new(claims.sub)
                .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?,
            email: claims.email,
            role: claims.role,
        })
    }
}
