use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid payload.")]
    InvalidPayload,
    #[error("Sorry. That email already exists.")]
    DuplicateEmail,
    #[error("User does not exist")]
    UserNotFound,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::InvalidPayload => {
                tracing::debug!("Rejected invalid payload");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::DuplicateEmail => {
                tracing::debug!("Rejected duplicate email");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UserNotFound => {
                tracing::debug!("User lookup missed");
                (StatusCode::NOT_FOUND, self.to_string())
            }
        };

        let body = Json(json!({
            "status": "fail",
            "message": message
        }));

        (status, body).into_response()
    }
}
