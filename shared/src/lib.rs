pub mod error;
pub mod models;
pub mod validation;
pub mod statistics;

pub use error::{Error, ErrorCode, Result, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use statistics::compute_statistics;

#[cfg(test)]
mod tests;
