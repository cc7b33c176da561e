use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::catalog::{FilterError, PaginationError, SortError};
use crate::store::StoreError;

/// Everything a movie handler can fail with, mapped onto a status code and a
/// JSON body.
#[derive(Error, Debug)]
pub enum MovieError {
    #[error("Movie not found")]
    NotFound,
    #[error("Invalid sort parameters")]
    InvalidSort(#[from] SortError),
    #[error("Invalid pagination parameters")]
    InvalidPagination(#[from] PaginationError),
    #[error("Invalid filter parameters")]
    InvalidFilter(#[from] FilterError),
    #[error("{0}")]
    Validation(String),
    /// Store failures are not classified any further; the underlying message
    /// is returned to the caller.
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl MovieError {
    /// Wraps a store failure, logging it with the handler's context.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> MovieError {
        move |source| {
            tracing::error!("{}: {}", context, source);
            MovieError::Store { context, source }
        }
    }
}

impl From<ValidationErrors> for MovieError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match err.message.as_ref() {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request body".to_string());
        MovieError::Validation(message)
    }
}

impl ResponseError for MovieError {
    fn status_code(&self) -> StatusCode {
        match self {
            MovieError::NotFound => StatusCode::NOT_FOUND,
            MovieError::InvalidSort(_)
            | MovieError::InvalidPagination(_)
            | MovieError::InvalidFilter(_)
            | MovieError::Validation(_) => StatusCode::BAD_REQUEST,
            MovieError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            MovieError::InvalidFilter(err) => json!({
                "message": self.to_string(),
                "error": err.to_string(),
            }),
            MovieError::Store { source, .. } => json!({
                "message": self.to_string(),
                "error": source.to_string(),
            }),
            _ => json!({ "message": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
