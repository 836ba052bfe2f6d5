// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, UserName};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl User {
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn set_name(&mut self, name: UserName) {
        self.name = name;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl NewUser {
    pub fn new(email: Email, name: UserName, password_hash: PasswordHash, role: Role) -> Self {
        Self {
            email,
            name,
            password_hash,
            role,
        }
    }
}
