use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{error::ErrorResponse, models::*};
use crate::config::CONFIG;

fn url(path: &str) -> String {
    format!("{}{}", CONFIG.api_base_url, path)
}

async fn error_message(response: Response, fallback: &str) -> String {
    response.json::<ErrorResponse>().await
        .map(|err| err.message)
        .unwrap_or_else(|_| fallback.to_string())
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response, "Something went wrong").await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    handle_response(response).await
}

pub async fn get_candidates() -> Result<Vec<Candidate>, String> {
    send(Request::get(&url("/candidates"))).await
}

pub async fn get_candidate(id: u64) -> Result<Candidate, String> {
    send(Request::get(&url(&format!("/candidates/{}", id)))).await
}

pub async fn create_candidate(payload: &CandidatePayload) -> Result<Candidate, String> {
    let request = Request::post(&url("/candidates"))
        .json(payload)
        .map_err(|e| e.to_string())?;
    send(request).await
}

pub async fn update_candidate(id: u64, payload: &CandidatePayload) -> Result<Candidate, String> {
    let request = Request::put(&url(&format!("/candidates/{}", id)))
        .json(payload)
        .map_err(|e| e.to_string())?;
    send(request).await
}

pub async fn delete_candidate(id: u64) -> Result<(), String> {
    let response = Request::delete(&url(&format!("/candidates/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response, "Failed to delete candidate").await)
    }
}

pub async fn generate_candidate() -> Result<Candidate, String> {
    send(Request::post(&url("/candidates/generate"))).await
}

pub async fn get_statistics() -> Result<StatisticsReport, String> {
    send(Request::get(&url("/statistics"))).await
}

pub async fn get_parties() -> Result<Vec<String>, String> {
    send(Request::get(&url("/parties"))).await
}
