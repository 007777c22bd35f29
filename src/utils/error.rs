use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every failure the service can report is a client-input error; transport
/// failures are actix's problem.
#[derive(Debug)]
pub enum AppError {
    /// Registration with an already-used username (400).
    DuplicateUser(String),
    /// The `username` header did not resolve to a registered user (400).
    UnknownUser,
    /// The todo id was not found in the resolved user's own list (404).
    UnknownTodo(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateUser(username) => {
                write!(f, "user '{}' already exists", username)
            }
            AppError::UnknownUser => write!(f, "user does not exist"),
            AppError::UnknownTodo(id) => write!(f, "todo '{}' does not exist", id),
        }
    }
}

impl std::error::Error for AppError {}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUser(_) | AppError::UnknownUser => StatusCode::BAD_REQUEST,
            AppError::UnknownTodo(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
