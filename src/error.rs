use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

/// Error kinds for the chat subsystem and its auth extractors.
///
/// Each variant maps to one HTTP status; every failure is serialized as the
/// same `{"error": "..."}` body the rest of the API uses. Duplicate-creation
/// races on the chat uniqueness constraint are resolved internally by the
/// registry and never reach this type.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing, malformed, or expired credential.
    #[error("{0}")]
    Unauthenticated(String),
    /// Valid credential, but the caller may not perform this operation.
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    /// Server misconfiguration (missing app data, bad environment).
    #[error("{0}")]
    Internal(String),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

impl actix_web::ResponseError for ChatError {
    fn status_code(&self) -> StatusCode {
        match self {
            ChatError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ChatError::Forbidden(_) => StatusCode::FORBIDDEN,
            ChatError::NotFound(_) => StatusCode::NOT_FOUND,
            ChatError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ChatError::Internal(_) | ChatError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
