//! Error types for the service layer and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::DbId;
use crate::templates::error_page;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The path segment was not an id at all, so no row can match it.
    #[error("{entity} not found")]
    MalformedId { entity: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound { .. } | AppError::MalformedId { .. } => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

/// Returns true when the error is SQLite rejecting a row whose category
/// reference points at nothing.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.kind() == sqlx::error::ErrorKind::ForeignKeyViolation
        }
        _ => false,
    }
}
