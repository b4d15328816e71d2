use std::sync::Arc;
use rocket::{State, get, post, put, delete, http::Status, serde::json::{self, Json}};
use tracing::{debug, info, instrument, warn};
use shared::{models::*, statistics::compute_statistics, validation::validate_candidate};
use crate::{
    config::AppConfig,
    error::ApiError,
    generator::{self, AVAILABLE_PARTIES},
    store::CandidateStore,
    utils::{fallback_image_url, now_rfc3339},
};

pub struct AppState {
    pub store: Arc<CandidateStore>,
}

impl AppState {
    pub fn new(store: CandidateStore) -> Self {
        Self { store: Arc::new(store) }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let store = CandidateStore::new(config.id_strategy);
        if config.seed_candidates {
            for candidate in generator::seed_candidates() {
                store.insert(candidate)?;
            }
            info!("Seeded {} candidates", store.len()?);
        }
        Ok(Self::new(store))
    }
}

type Payload<'r> = Result<Json<CandidatePayload>, json::Error<'r>>;

fn read_payload(payload: Payload<'_>) -> Result<NewCandidate, ApiError> {
    let payload = payload.map_err(|e| {
        warn!("Unreadable candidate payload: {:?}", e);
        ApiError::ValidationFailed("Request body must be valid JSON".into())
    })?;

    let draft = validate_candidate(&payload)?;
    Ok(draft.with_image_or(fallback_image_url))
}

#[get("/candidates")]
pub async fn list_candidates(state: &State<AppState>) -> Result<Json<Vec<Candidate>>, ApiError> {
    Ok(Json(state.store.list()?))
}

#[get("/candidates/<id>")]
pub async fn get_candidate(state: &State<AppState>, id: u64) -> Result<Json<Candidate>, ApiError> {
    Ok(Json(state.store.get_by_id(id)?))
}

#[instrument(skip(state, payload))]
#[post("/candidates", data = "<payload>")]
pub async fn create_candidate(
    state: &State<AppState>,
    payload: Payload<'_>,
) -> Result<(Status, Json<Candidate>), ApiError> {
    let candidate = state.store.insert(read_payload(payload)?)?;
    debug!("Created candidate {}", candidate.id);
    Ok((Status::Created, Json(candidate)))
}

// An unknown id is reported before an invalid body.
#[instrument(skip(state, payload))]
#[put("/candidates/<id>", data = "<payload>")]
pub async fn update_candidate(
    state: &State<AppState>,
    id: u64,
    payload: Payload<'_>,
) -> Result<Json<Candidate>, ApiError> {
    state.store.get_by_id(id)?;
    let candidate = state.store.replace(id, read_payload(payload)?)?;
    debug!("Updated candidate {}", id);
    Ok(Json(candidate))
}

#[instrument(skip(state))]
#[delete("/candidates/<id>")]
pub async fn delete_candidate(state: &State<AppState>, id: u64) -> Result<Status, ApiError> {
    state.store.remove_by_id(id)?;
    debug!("Deleted candidate {}", id);
    Ok(Status::NoContent)
}

#[instrument(skip(state))]
#[post("/candidates/generate")]
pub async fn generate_candidate(state: &State<AppState>) -> Result<(Status, Json<Candidate>), ApiError> {
    let candidate = generator::generate(&mut rand::thread_rng());
    let candidate = state.store.insert(candidate)?;
    debug!("Generated candidate {} ({})", candidate.id, candidate.name);
    Ok((Status::Created, Json(candidate)))
}

#[get("/statistics")]
pub async fn get_statistics(state: &State<AppState>) -> Result<Json<StatisticsReport>, ApiError> {
    let snapshot = state.store.list()?;
    Ok(Json(compute_statistics(&snapshot)))
}

#[get("/parties")]
pub async fn list_parties() -> Json<Vec<String>> {
    Json(AVAILABLE_PARTIES.iter().map(|p| p.to_string()).collect())
}

#[get("/health")]
pub async fn health() -> Result<Json<HealthStatus>, ApiError> {
    Ok(Json(HealthStatus {
        status: "OK".into(),
        timestamp: now_rfc3339()?,
    }))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
