// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use pressroom::domain::errors::{DomainError, DomainResult};
use pressroom::domain::user::{Email, NewUser, Role, User, UserId, UserRepository};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    users: HashMap<i64, User>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Inner>,
}

impl InMemoryUserRepo {
    pub fn seed(&self, users: impl IntoIterator<Item = User>) {
        let mut inner = self.inner.lock().unwrap();
        for user in users {
            let id = i64::from(user.id);
            inner.next_id = inner.next_id.max(id);
            inner.users.insert(id, user);
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().users.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
        };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(user.id);
        if !inner.users.contains_key(&id) {
            return Err(DomainError::NotFound("user not found".into()));
        }
        inner.users.insert(id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().users.get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by_key(|user| i64::from(user.id));
        Ok(users)
    }

    async fn count_by_role(&self, role: Role) -> DomainResult<u64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .filter(|user| user.role == role)
            .count() as u64)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner.lock().unwrap().users.remove(&i64::from(id));
        Ok(())
    }
}
