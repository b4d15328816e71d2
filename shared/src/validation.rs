use crate::models::{CandidateDraft, CandidatePayload};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, description, and party are required";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{REQUIRED_FIELDS_MESSAGE}")]
    MissingFields(Vec<&'static str>),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Names of the required fields that are absent or empty, in form order.
pub fn missing_fields(payload: &CandidatePayload) -> Vec<&'static str> {
    [
        ("name", &payload.name),
        ("description", &payload.description),
        ("party", &payload.party),
    ]
    .into_iter()
    .filter(|(_, value)| present(value).is_none())
    .map(|(field, _)| field)
    .collect()
}

pub fn validate_candidate(payload: &CandidatePayload) -> Result<CandidateDraft, ValidationError> {
    match (present(&payload.name), present(&payload.description), present(&payload.party)) {
        (Some(name), Some(description), Some(party)) => Ok(CandidateDraft {
            name: name.to_string(),
            description: description.to_string(),
            party: party.to_string(),
            image: present(&payload.image).map(str::to_string),
        }),
        _ => Err(ValidationError::MissingFields(missing_fields(payload))),
    }
}
