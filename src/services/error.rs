use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;

/// Failure conditions of the review service. The kinds are kept apart for
/// logging and tests; the transport boundary maps each onto a status code
/// and the uniform JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("no reviews found")]
    EmptyResult,
    #[error("store error: {0}")]
    Store(String),
}

impl actix_web::ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::EmptyResult => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "status": "Error",
            "code": status.as_u16(),
            "message": self.to_string(),
        }))
    }
}
