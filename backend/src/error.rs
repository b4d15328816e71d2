use rocket::response::Responder;
use serde::Serialize;
use shared::error::{Error, ErrorCode};
use shared::validation::ValidationError;
use thiserror::Error;
use tracing::{error, warn};
use crate::store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "Candidate not found";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug, Serialize, PartialEq)]
pub enum ApiError {
    #[error("{NOT_FOUND_MESSAGE}")]
    NotFound,
    #[error("{0}")]
    ValidationFailed(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::LockFailed => ApiError::Internal("candidate store lock poisoned".into()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::ValidationFailed(e.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let body = match self {
            ApiError::NotFound => Error::new(ErrorCode::NotFound, NOT_FOUND_MESSAGE),
            ApiError::ValidationFailed(message) => {
                warn!("Rejected {} {}: {}", req.method(), req.uri(), message);
                Error::new(ErrorCode::ValidationFailed, message)
            }
            ApiError::Internal(details) => {
                error!("{} {} failed: {}", req.method(), req.uri(), details);
                Error::with_details(ErrorCode::SystemError, INTERNAL_MESSAGE, details)
            }
        };

        body.respond_to(req)
    }
}
