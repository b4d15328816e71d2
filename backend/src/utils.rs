use crate::error::ApiError;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub const IMAGE_BASE_URL: &str = "https://picsum.photos/200/200";

pub fn unix_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

/// Image used when a create or update request leaves `image` blank.
pub fn fallback_image_url() -> String {
    format!("{}?random={}", IMAGE_BASE_URL, unix_millis())
}

pub fn now_rfc3339() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal(e.to_string()))
}
