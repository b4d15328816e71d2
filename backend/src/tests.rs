use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::json;
use shared::{error::ErrorResponse, models::*, validation::REQUIRED_FIELDS_MESSAGE};
use crate::{api, config::AppConfig, routes::AppState, store::{CandidateStore, IdStrategy}};

fn client() -> Client {
    let state = AppState::from_config(&AppConfig::default()).unwrap();
    Client::tracked(api(state)).expect("valid rocket instance")
}

fn empty_client(strategy: IdStrategy) -> Client {
    Client::tracked(api(AppState::new(CandidateStore::new(strategy)))).expect("valid rocket instance")
}

fn list(client: &Client) -> Vec<Candidate> {
    client.get("/api/candidates").dispatch().into_json().unwrap()
}

fn create(client: &Client, body: serde_json::Value) -> (Status, String) {
    let response = client.post("/api/candidates")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    (response.status(), response.into_string().unwrap_or_default())
}

fn message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).unwrap().message
}

#[test]
fn test_lists_seeded_candidates() {
    let client = client();
    let candidates = list(&client);
    assert_eq!(candidates.len(), 10);
    assert_eq!(candidates[0].name, "Maria Popescu");
    assert_eq!(candidates.iter().map(|c| c.id).collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_get_by_id() {
    let client = client();
    let response = client.get("/api/candidates/3").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_json::<Candidate>().unwrap().name, "Ana Vasilescu");

    let response = client.get("/api/candidates/99").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(message(&response.into_string().unwrap()), "Candidate not found");
}

#[test]
fn test_create_with_fallback_image() {
    let client = client();
    let (status, body) = create(&client, json!({
        "name": "Ioana Stan",
        "description": "Civic tech volunteer.",
        "party": "USR",
        "image": ""
    }));
    assert_eq!(status, Status::Created);

    let created: Candidate = serde_json::from_str(&body).unwrap();
    assert_eq!(created.id, 11);
    assert!(!created.image.is_empty());
    let marker = created.image.split("random=").nth(1).unwrap();
    assert!(marker.parse::<i128>().unwrap() > 0);
    assert_eq!(list(&client).last(), Some(&created));
}

#[test]
fn test_create_keeps_given_image_and_accepts_any_party() {
    let client = client();
    let (status, body) = create(&client, json!({
        "name": "Ion", "description": "Independent.", "party": "Independent",
        "image": "https://example.com/ion.png"
    }));
    assert_eq!(status, Status::Created);
    let created: Candidate = serde_json::from_str(&body).unwrap();
    assert_eq!(created.image, "https://example.com/ion.png");
    assert_eq!(created.party, "Independent");
}

#[test]
fn test_create_keeps_whitespace_values() {
    let client = client();
    let (status, body) = create(&client, json!({
        "name": " ", "description": "d", "party": "PSD", "image": " "
    }));
    assert_eq!(status, Status::Created);
    let created: Candidate = serde_json::from_str(&body).unwrap();
    assert_eq!(created.name, " ");
    assert_eq!(created.image, " ");
}

#[test]
fn test_create_requires_fields() {
    let client = client();
    let (status, body) = create(&client, json!({ "name": "Ion", "description": "" }));
    assert_eq!(status, Status::BadRequest);
    assert_eq!(message(&body), REQUIRED_FIELDS_MESSAGE);
    assert_eq!(list(&client).len(), 10);

    let response = client.post("/api/candidates")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn test_update() {
    let client = client();
    let response = client.put("/api/candidates/2")
        .header(ContentType::JSON)
        .body(json!({ "name": "Ion Ionescu", "description": "Farmer.", "party": "PSD" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let updated: Candidate = response.into_json().unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.party, "PSD");
    assert!(updated.image.contains("random="));
    assert_eq!(list(&client)[1], updated);
}

#[test]
fn test_update_checks_existence_before_body() {
    let client = client();
    let response = client.put("/api/candidates/77")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client.put("/api/candidates/1")
        .header(ContentType::JSON)
        .body(json!({ "name": "Maria" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(list(&client)[0].name, "Maria Popescu");
}

#[test]
fn test_delete() {
    let client = client();
    let response = client.delete("/api/candidates/4").dispatch();
    assert_eq!(response.status(), Status::NoContent);
    assert!(response.into_string().unwrap_or_default().is_empty());

    let ids: Vec<_> = list(&client).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_delete_missing_leaves_list_unchanged() {
    let client = client();
    let before = list(&client);
    let response = client.delete("/api/candidates/404").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(message(&response.into_string().unwrap()), "Candidate not found");
    assert_eq!(list(&client), before);
}

#[test]
fn test_length_ids_repeat_after_delete() {
    let client = client();
    client.delete("/api/candidates/1").dispatch();
    let (_, body) = create(&client, json!({ "name": "A", "description": "B", "party": "PSD" }));
    let created: Candidate = serde_json::from_str(&body).unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(list(&client).iter().filter(|c| c.id == 10).count(), 2);
}

#[test]
fn test_monotonic_ids() {
    let client = empty_client(IdStrategy::Monotonic);
    for name in ["A", "B"] {
        create(&client, json!({ "name": name, "description": "d", "party": "PNL" }));
    }
    client.delete("/api/candidates/1").dispatch();
    let (_, body) = create(&client, json!({ "name": "C", "description": "d", "party": "PNL" }));
    assert_eq!(serde_json::from_str::<Candidate>(&body).unwrap().id, 3);
}

#[test]
fn test_generate() {
    let client = client();
    let response = client.post("/api/candidates/generate").dispatch();
    assert_eq!(response.status(), Status::Created);

    let generated: Candidate = response.into_json().unwrap();
    let parties: Vec<String> = client.get("/api/parties").dispatch().into_json().unwrap();
    assert_eq!(generated.id, 11);
    assert!(parties.contains(&generated.party));
    assert!(!generated.name.is_empty());
    assert_eq!(list(&client).len(), 11);
}

#[test]
fn test_statistics() {
    let client = client();
    let report: StatisticsReport = client.get("/api/statistics").dispatch().into_json().unwrap();
    assert_eq!(report.total_candidates, 10);
    assert_eq!(report.party_count, 10);
    assert_eq!(report.most_common_party, "PSD");
    assert_eq!(report.most_common_party_count, 1);
    assert!(report.party_distribution.iter().all(|s| s.percentage == "10.0"));
    assert_eq!(report.shortest_description, "Technology expert.");
    assert_eq!(report.longest_description, "Supports education and digitalization.");
    assert_eq!(report.recent_candidates.iter().map(|c| c.id).collect::<Vec<_>>(), vec![10, 9, 8, 7, 6]);
}

#[test]
fn test_statistics_follow_store() {
    let client = client();
    create(&client, json!({ "name": "X", "description": "d", "party": "USR" }));
    let report: StatisticsReport = client.get("/api/statistics").dispatch().into_json().unwrap();
    assert_eq!(report.total_candidates, 11);
    assert_eq!(report.most_common_party, "USR");
    assert_eq!(report.most_common_party_count, 2);
    assert_eq!(report.recent_candidates[0].name, "X");
}

#[test]
fn test_empty_statistics() {
    let client = empty_client(IdStrategy::Length);
    let report: StatisticsReport = client.get("/api/statistics").dispatch().into_json().unwrap();
    assert_eq!(report.total_candidates, 0);
    assert_eq!(report.most_common_party, "None");
    assert_eq!(report.shortest_name, "");
}

#[test]
fn test_parties_and_health() {
    let client = client();
    let parties: Vec<String> = client.get("/api/parties").dispatch().into_json().unwrap();
    assert_eq!(parties.len(), 10);
    assert_eq!(parties[6], "PRO România");

    let health: HealthStatus = client.get("/api/health").dispatch().into_json().unwrap();
    assert_eq!(health.status, "OK");
    assert!(health.timestamp.contains('T'));
}

#[test]
fn test_cors_and_preflight() {
    let client = client();
    let response = client.options("/api/candidates/1").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
    assert!(response.headers().get_one("Access-Control-Allow-Methods").unwrap().contains("DELETE"));
}

#[test]
fn test_unknown_route_and_bad_id() {
    let client = client();
    let response = client.get("/api/nothing").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(message(&response.into_string().unwrap()), "Route not found");

    let response = client.get("/api/candidates/abc").dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
    assert_eq!(message(&response.into_string().unwrap()), "Invalid candidate id");
}
