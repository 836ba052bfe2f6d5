use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    fields: Option<BTreeMap<String, String>>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: errors.message().to_string(),
                fields: (!errors.is_empty()).then(|| errors.fields().clone()),
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, msg),
            // wiring and backend failures are opaque to the client
            ApplicationError::HandlerNotFound(_) | ApplicationError::Infrastructure(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
            // Domain errors keep their taxonomy: a unique-constraint race that
            // slipped past the handler's pre-check still surfaces as a 409.
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                DomainError::Persistence(_) => {
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
                }
            },
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            fields: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.fields,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, String>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ValidationErrors;

    #[test]
    fn application_errors_map_to_their_status_codes() {
        let cases = [
            (ApplicationError::not_found("gone"), StatusCode::NOT_FOUND),
            (ApplicationError::conflict("taken"), StatusCode::CONFLICT),
            (ApplicationError::unauthorized("who"), StatusCode::UNAUTHORIZED),
            (ApplicationError::forbidden("no"), StatusCode::FORBIDDEN),
            (
                ApplicationError::handler_not_found("SomeCommand"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApplicationError::infrastructure("pool exhausted"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(HttpError::from_error(err).status, expected);
        }
    }

    // The handler pre-checks lose a check-then-act race; the storage
    // constraint then reports through DomainError and must keep its meaning.
    #[test]
    fn domain_conflict_from_a_storage_race_stays_a_409() {
        let err = ApplicationError::Domain(DomainError::Conflict("email already exists".into()));
        let mapped = HttpError::from_error(err);
        assert_eq!(mapped.status, StatusCode::CONFLICT);
        assert_eq!(mapped.message, "email already exists");
    }

    #[test]
    fn domain_persistence_failures_are_opaque_500s() {
        let err = ApplicationError::Domain(DomainError::Persistence(
            "connection reset by postgres".into(),
        ));
        let mapped = HttpError::from_error(err);
        assert_eq!(mapped.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(mapped.message, "internal error");
    }

    #[test]
    fn domain_validation_and_not_found_keep_their_codes() {
        let err = ApplicationError::Domain(DomainError::Validation("user id must be positive".into()));
        assert_eq!(HttpError::from_error(err).status, StatusCode::BAD_REQUEST);

        let err = ApplicationError::Domain(DomainError::NotFound("author not found".into()));
        assert_eq!(HttpError::from_error(err).status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_carry_the_field_map() {
        let mut errors = ValidationErrors::empty();
        errors.insert("title", "too short");
        let mapped = HttpError::from_error(errors.into());
        assert_eq!(mapped.status, StatusCode::BAD_REQUEST);
        assert_eq!(mapped.fields.unwrap()["title"], "too short");
    }
}
