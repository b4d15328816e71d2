use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub party: String,
}

/// Body of a create or update request. Every field is optional on the wire so
/// that a missing field is reported as a validation failure instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A payload that passed presence validation. `image` is `None` when the
/// caller left it out or sent an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDraft {
    pub name: String,
    pub description: String,
    pub party: String,
    pub image: Option<String>,
}

/// Everything a stored candidate needs except its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub description: String,
    pub party: String,
    pub image: String,
}

impl NewCandidate {
    pub fn into_candidate(self, id: u64) -> Candidate {
        Candidate {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            party: self.party,
        }
    }
}

impl CandidateDraft {
    pub fn with_image_or(self, fallback: impl FnOnce() -> String) -> NewCandidate {
        NewCandidate {
            name: self.name,
            description: self.description,
            party: self.party,
            image: self.image.unwrap_or_else(fallback),
        }
    }
}

impl From<&Candidate> for CandidatePayload {
    fn from(candidate: &Candidate) -> Self {
        Self {
            name: Some(candidate.name.clone()),
            description: Some(candidate.description.clone()),
            party: Some(candidate.party.clone()),
            image: Some(candidate.image.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartyShare {
    pub party: String,
    pub count: usize,
    pub percentage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub total_candidates: usize,
    pub party_count: usize,
    pub most_common_party: String,
    pub most_common_party_count: usize,
    pub avg_description_length: usize,
    pub party_distribution: Vec<PartyShare>,
    pub longest_description: String,
    pub shortest_description: String,
    pub longest_name: String,
    pub shortest_name: String,
    pub recent_candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}
