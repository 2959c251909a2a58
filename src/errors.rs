use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error on `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Duplicate review: this user has already reviewed this tour")]
    DuplicateReview,

    #[error("Failed to recompute ratings for tour {tour_id}: {source}")]
    RatingsRecompute {
        tour_id: Uuid,
        #[source]
        source: Box<AppError>,
    },

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn unknown_tour(tour_id: Uuid) -> Self {
        AppError::validation("tour", format!("No tour found with id {tour_id}"))
    }

    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DuplicateReview => (StatusCode::CONFLICT, self.to_string()),
            AppError::RatingsRecompute { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::JwtError(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::DatabaseError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }
}
