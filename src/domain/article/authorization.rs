// src/domain/article/authorization.rs
//
// Pure decision functions for article operations. Ownership is compared by
// user identity; readers never pass, admins always do.

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Actor, Role};

pub fn can_create_article(actor: Option<&Actor>) -> bool {
    matches!(actor, Some(actor) if matches!(actor.role, Role::Author | Role::Admin))
}

/// Role-only gate evaluated before the article is loaded, so a caller who
/// could never modify any article is told "forbidden" without learning
/// whether the resource exists.
pub fn may_modify_articles(actor: Option<&Actor>) -> bool {
    matches!(actor, Some(actor) if matches!(actor.role, Role::Author | Role::Admin))
}

pub fn can_modify_article(actor: Option<&Actor>, article: &Article) -> bool {
    match actor {
        Some(actor) => match actor.role {
            Role::Admin => true,
            Role::Author => article.author_id == actor.id,
            Role::Reader => false,
        },
        None => false,
    }
}
