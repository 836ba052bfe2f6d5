// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod auth;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Body of every `201 Created` reply: the id assigned to the new resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}
