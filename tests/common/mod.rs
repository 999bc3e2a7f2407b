//! Fixture legislature API served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Request bodies the fixture received, in order.
#[derive(Clone, Default)]
pub struct Received {
    bodies: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Received {
    pub fn bodies(&self) -> Vec<(String, Value)> {
        self.bodies.lock().unwrap().clone()
    }

    fn push(&self, path: impl Into<String>, body: Value) {
        self.bodies.lock().unwrap().push((path.into(), body));
    }
}

/// A running fixture server.
pub struct FixtureApi {
    pub origin: String,
    pub received: Received,
}

/// Starts the fixture server and returns its origin (no trailing slash).
///
/// - `/parties/` fails with 500
/// - `/debates/` answers 200 with a body that is not JSON
/// - `/members/` is not routed (404)
pub async fn spawn_fixture_api() -> FixtureApi {
    let received = Received::default();

    let app = Router::new()
        .route("/api/v1/proposals/", get(list_proposals).post(create_proposal))
        .route("/api/v1/proposals/:id", get(get_proposal))
        .route("/api/v1/parties/", get(parties_down))
        .route("/api/v1/debates/", get(debates_garbled))
        .route("/api/v1/simulation/:id/start", post(start_simulation))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FixtureApi {
        origin: format!("http://{}", addr),
        received,
    }
}

async fn list_proposals() -> Json<Value> {
    Json(json!([
        {"id": 7, "title": "Climate Act", "content": "...", "status": "passed", "proposer_id": 3},
        {"id": 8, "title": "Housing Act", "content": "...", "status": "draft", "proposer_id": 4}
    ]))
}

async fn get_proposal(Path(id): Path<i64>) -> impl IntoResponse {
    if id != 7 {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Proposal not found"})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": 7,
            "title": "Climate Act",
            "content": "<p>Net zero by 2040.</p>",
            "status": "passed",
            "proposer_id": 3,
            "submitted_date": "2024-03-01T09:30:00",
            "vote_date": "2024-04-02T14:00:00",
            "proposer": {
                "id": 3,
                "name": "Anna de Vries",
                "party_id": 1,
                "party": {"id": 1, "name": "Green Left", "abbreviation": "GL"}
            },
            "votes_summary": {
                "total": 10, "for_votes": 7, "against_votes": 2,
                "abstain_votes": 1, "absent_votes": 0, "passed": true
            }
        })),
    )
}

async fn create_proposal(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.push("/proposals/", body.clone());
    Json(json!({
        "id": 12,
        "title": body["title"],
        "content": body["content"],
        "status": "draft",
        "proposer_id": body["proposer_id"]
    }))
}

async fn start_simulation(
    State(received): State<Received>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    received.push(format!("/simulation/{}/start", id), body);
    Json(json!({"detail": format!("Simulation started for proposal {}", id)}))
}

async fn parties_down() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable")
}

async fn debates_garbled() -> &'static str {
    "<html>not json</html>"
}
