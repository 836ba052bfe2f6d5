// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        CreateUserCommand, CreateUserPayload, DeleteUserCommand, UpdateUserCommand,
        UpdateUserPayload,
    },
    dto::UserDto,
    queries::users::{GetUserQuery, GetUsersQuery},
};
use crate::presentation::http::controllers::CreatedResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users.", body = [UserDto]),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Users",
    security(("bearer" = []))
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .query_bus()
        .dispatch(GetUsersQuery { actor: actor.0 })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id.")),
    responses(
        (status = 200, description = "The user.", body = UserDto),
        (status = 403, description = "Caller is not an administrator."),
        (status = 404, description = "No such user.")
    ),
    tag = "Users",
    security(("bearer" = []))
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .query_bus()
        .dispatch(GetUserQuery { actor: actor.0, id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created.", body = CreatedResponse),
        (status = 400, description = "Validation failure."),
        (status = 403, description = "Caller is not an administrator."),
        (status = 409, description = "Email already taken.")
    ),
    tag = "Users",
    security(("bearer" = []))
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Json(payload): Json<CreateUserPayload>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = CreateUserCommand::from_api(actor.0, payload).into_http()?;
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
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id.")),
    request_body = UpdateUserPayload,
    responses(
        (status = 204, description = "User updated."),
        (status = 400, description = "Validation failure."),
        (status = 403, description = "Caller is not an administrator."),
        (status = 404, description = "No such user."),
        (status = 409, description = "Email already taken.")
    ),
    tag = "Users",
    security(("bearer" = []))
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserPayload>,
) -> HttpResult<StatusCode> {
    let command = UpdateUserCommand::from_api(actor.0, id, payload).into_http()?;
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
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id.")),
    responses(
        (status = 204, description = "User deleted."),
        (status = 403, description = "Caller is not an administrator."),
        (status = 404, description = "No such user.")
    ),
    tag = "Users",
    security(("bearer" = []))
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .command_bus()
        .dispatch(DeleteUserCommand { actor: actor.0, id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
