// src/domain/user/authorization.rs
//
// Pure decision functions gating the admin-facing user operations.
// Self-registration does not pass through these.

use crate::domain::user::value_objects::{Actor, Role};

pub fn can_manage_users(actor: Option<&Actor>) -> bool {
    matches!(actor, Some(actor) if actor.role == Role::Admin)
}

pub fn can_read_users(actor: Option<&Actor>) -> bool {
    matches!(actor, Some(actor) if actor.role == Role::Admin)
}
