use rocket::{Request, catch, serde::json::Json};
use shared::error::ErrorResponse;
use crate::error::INTERNAL_MESSAGE;

fn message(text: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse { message: text.into() })
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    message("Invalid request body.")
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorResponse> {
    message("Route not found")
}

// Path ids that do not parse as an integer end up here.
#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorResponse> {
    message("Invalid candidate id")
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    message(INTERNAL_MESSAGE)
}
