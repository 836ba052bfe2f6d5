// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        LoginUserCommand, LoginUserPayload, RegisterUserCommand, RegisterUserPayload,
    },
    dto::LoginResultDto,
};
use crate::presentation::http::controllers::CreatedResponse;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterUserPayload,
    responses(
        (status = 201, description = "User registered.", body = CreatedResponse),
        (status = 400, description = "Validation failure."),
        (status = 403, description = "Admin self-registration after bootstrap."),
        (status = 409, description = "Email already taken.")
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserPayload>,
) -> HttpResult<(StatusCode, Json<CreatedResponse>)> {
    let command = RegisterUserCommand::from_api(payload).into_http()?;
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
    post,
    path = "/api/v1/auth/login",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Token issued.", body = LoginResultDto),
        (status = 401, description = "Invalid credentials.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginUserPayload>,
) -> HttpResult<Json<LoginResultDto>> {
    let command = LoginUserCommand::from_api(payload).into_http()?;
    state
        .services
        .command_bus()
        .dispatch(command)
        .await
        .into_http()
        .map(Json)
}
