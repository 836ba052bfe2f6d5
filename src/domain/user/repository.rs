// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User};
use crate::domain::user::value_objects::{Email, Role, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, user: &User) -> DomainResult<()>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn count_by_role(&self, role: Role) -> DomainResult<u64>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
