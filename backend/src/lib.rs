pub mod autogen;
pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod generator;
pub mod logging;
pub mod routes;
pub mod store;
pub mod utils;
pub use shared::{models::*, error::{Error, ErrorCode, ErrorResponse}, statistics::compute_statistics};

use rocket::{Build, Rocket};
use routes::AppState;

/// The API with its catchers and CORS fairing, mounted under `/api`.
pub fn api(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(cors::CORS)
        .manage(state)
        .mount(
            "/api",
            rocket::routes![
                routes::list_candidates,
                routes::get_candidate,
                routes::create_candidate,
                routes::update_candidate,
                routes::delete_candidate,
                routes::generate_candidate,
                routes::get_statistics,
                routes::list_parties,
                routes::health,
                routes::all_options,
            ],
        )
        .register(
            "/",
            rocket::catchers![
                catchers::bad_request,
                catchers::not_found,
                catchers::unprocessable,
                catchers::internal_error,
            ],
        )
}

#[cfg(test)]
mod tests;
