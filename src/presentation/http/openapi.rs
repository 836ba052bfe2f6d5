// src/presentation/http/openapi.rs
use crate::application::commands::articles::{CreateArticlePayload, UpdateArticlePayload};
use crate::application::commands::users::{
    CreateUserPayload, LoginUserPayload, RegisterUserPayload, UpdateUserPayload,
};
use crate::application::dto::{ArticleDto, AuthTokenDto, LoginResultDto, UserDto};
use crate::presentation::http::controllers::{CreatedResponse, articles, auth, users};
use crate::presentation::http::routes;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::{
    Modify, OpenApi, ToSchema,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        auth::register,
        auth::login,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        articles::list_articles,
        articles::get_article,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
    ),
    components(schemas(
        StatusResponse,
        CreatedResponse,
        RegisterUserPayload,
        LoginUserPayload,
        CreateUserPayload,
        UpdateUserPayload,
        CreateArticlePayload,
        UpdateArticlePayload,
        UserDto,
        ArticleDto,
        AuthTokenDto,
        LoginResultDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Registration and token issuance."),
        (name = "Users", description = "User administration."),
        (name = "Articles", description = "Article catalogue.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
