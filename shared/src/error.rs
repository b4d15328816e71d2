use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Resource not found")]
    NotFound,
    #[error("Internal system error")]
    SystemError,
    #[error("Validation failed")]
    ValidationFailed,
}

impl ErrorCode {
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorCode::ValidationFailed => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::SystemError => 500,
        }
    }
}

/// Error body sent by every failing API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse { message: self.message.clone() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// Details stay server-side; clients only ever see the message.
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::http::Status;
    use rocket::response::{self, Responder};
    use rocket::serde::json::Json;
    use rocket::Request;

    impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
        fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
            let status = Status::from_code(self.code.http_status())
                .unwrap_or(Status::InternalServerError);

            rocket::Response::build_from(Json(self.to_response()).respond_to(req)?)
                .status(status)
                .ok()
        }
    }
}
