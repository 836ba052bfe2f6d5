// src/application/error.rs
use crate::domain::errors::DomainError;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Validation failure report: a headline message plus a field -> message map
/// so callers see every failing field at once, not only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    message: String,
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Report of required keys absent or blank after trimming; `fields` is in
    /// declaration order.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::new(format!("Missing required fields: {}", fields.join(", ")))
    }

    pub fn empty() -> Self {
        Self::new("Invalid data")
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.fields.is_empty() {
            let details: Vec<String> = self
                .fields
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect();
            write!(f, " ({})", details.join("; "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Dispatch found no handler registered for the given command or query
    /// type. A wiring defect, never a user-facing condition.
    #[error("no handler found for \"{0}\"")]
    HandlerNotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::new(msg))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn handler_not_found(type_name: &str) -> Self {
        Self::HandlerNotFound(type_name.to_string())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keeps_declaration_order() {
        let errors = ValidationErrors::missing_fields(&["email", "name", "password"]);
        assert_eq!(
            errors.message(),
            "Missing required fields: email, name, password"
        );
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = ValidationErrors::empty();
        errors.insert("title", "too short");
        errors.insert("content", "too short");
        let rendered = errors.to_string();
        assert!(rendered.contains("title: too short"));
        assert!(rendered.contains("content: too short"));
    }
}
