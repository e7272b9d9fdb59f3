use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::dto::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{message}: {details}")]
    InvalidPayload { message: String, details: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// A write rejected by a foreign-key constraint. Reported as 500, not 409.
    #[error("Constraint violation: {message}: {details}")]
    Conflict { message: String, details: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Replaces the client-facing message of a `Conflict`, keeping the store's details.
    pub fn with_conflict_message(self, message: &str) -> Self {
        match self {
            Error::Conflict { details, .. } => Error::Conflict {
                message: message.to_string(),
                details,
            },
            other => other,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = match self {
            Error::BadRequest(msg) | Error::NotFound(msg) => ErrorResponse::new(msg),
            Error::InvalidPayload { message, details } => {
                ErrorResponse::with_details(message, details)
            }
            Error::Conflict { message, details } => {
                tracing::warn!(%details, "{}", message);
                ErrorResponse::with_details(message, details)
            }
            Error::Database(err) => {
                tracing::error!(error = ?err, "Database error");
                ErrorResponse::new("Database error")
            }
            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new(msg)
            }
            other => {
                tracing::error!(error = ?other, "Unhandled error");
                ErrorResponse::new("An unexpected error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => Error::Conflict {
                message: "Constraint violation".to_string(),
                details: db.message().to_string(),
            },
            other => Error::Database(other),
        }
    }
}
