// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, CreateArticlePayload, DeleteArticleCommand, UpdateArticleCommand,
        UpdateArticlePayload,
    },
    dto::ArticleDto,
    queries::articles::{GetArticleQuery, GetArticlesQuery},
};
use crate::presentation::http::controllers::CreatedResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses((status = 200, description = "All articles, newest first.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .query_bus()
        .dispatch(GetArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .query_bus()
        .dispatch(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticlePayload,
    responses(
        (status = 201, description = "Article created.", body = CreatedResponse),
        (status = 400, description = "Validation failure."),
        (status = 401, description = "Missing or invalid token."),
        (status = 403, description = "Caller may not create articles."),
        (status = 409, description = "Title already taken.")
    ),
    tag = "Articles",
    security(("bearer" = []))
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticlePayload>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = CreateArticleCommand::from_api(user, payload).into_http()?;
    let id = state
        .services
        .command_bus()
        .dispatch(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: i64::from(id) }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    request_body = UpdateArticlePayload,
    responses(
        (status = 204, description = "Article updated."),
        (status = 400, description = "Validation failure."),
        (status = 401, description = "Missing or invalid token."),
        (status = 403, description = "Caller may not modify this article."),
        (status = 404, description = "No such article."),
        (status = 409, description = "Title already taken.")
    ),
    tag = "Articles",
    security(("bearer" = []))
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticlePayload>,
) -> HttpResult<StatusCode> {
    let command = UpdateArticleCommand::from_api(user, id, payload).into_http()?;
    state
        .services
        .command_bus()
        .dispatch(command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 401, description = "Missing or invalid token."),
        (status = 403, description = "Caller may not modify this article."),
        (status = 404, description = "No such article.")
    ),
    tag = "Articles",
    security(("bearer" = []))
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .command_bus()
        .dispatch(DeleteArticleCommand { actor: user, id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
