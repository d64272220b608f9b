//! Shared utilities for integration tests: a mock HBnB API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Canned responses served by the mock.
#[derive(Clone)]
pub struct MockResponses {
    pub status: Value,
    pub places: Value,
    pub search_status: StatusCode,
    pub states: Value,
    pub cities: HashMap<String, Value>,
    pub amenities: Value,
    pub stats: Value,
}

impl Default for MockResponses {
    fn default() -> Self {
        let mut cities = HashMap::new();
        cities.insert(
            "s-1".to_string(),
            json!([
                {"id": "c-2", "name": "San Jose", "state_id": "s-1"},
                {"id": "c-1", "name": "Fremont", "state_id": "s-1"}
            ]),
        );
        cities.insert("s-2".to_string(), json!([]));

        Self {
            status: json!({"status": "OK"}),
            places: json!([
                {
                    "__class__": "Place",
                    "id": "p-1",
                    "name": "Lovely Loft",
                    "price_by_night": 120,
                    "max_guest": 1,
                    "number_rooms": 2,
                    "number_bathrooms": 1,
                    "description": "Sunny and quiet"
                },
                {
                    "id": "p-2",
                    "name": "Beach House",
                    "price_by_night": 300,
                    "max_guest": 6,
                    "number_rooms": 3,
                    "number_bathrooms": 2,
                    "description": "Steps from the sand"
                }
            ]),
            search_status: StatusCode::OK,
            states: json!([
                {"id": "s-2", "name": "Texas"},
                {"id": "s-1", "name": "California"}
            ]),
            cities,
            amenities: json!([
                {"id": "a-1", "name": "Wifi"},
                {"id": "a-2", "name": "AC"}
            ]),
            stats: json!({
                "amenities": 2, "cities": 2, "places": 2,
                "reviews": 0, "states": 2, "users": 1
            }),
        }
    }
}

pub struct MockState {
    responses: MockResponses,
    search_bodies: Mutex<Vec<Value>>,
    request_ids: Mutex<Vec<String>>,
    catalog_hits: AtomicU32,
}

/// A running mock API.
pub struct MockApi {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

#[allow(dead_code)]
impl MockApi {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON bodies received by `places_search`, oldest first.
    pub fn search_bodies(&self) -> Vec<Value> {
        self.state.search_bodies.lock().unwrap().clone()
    }

    /// `X-Request-Id` headers seen on any endpoint.
    pub fn request_ids(&self) -> Vec<String> {
        self.state.request_ids.lock().unwrap().clone()
    }

    /// Requests made to the states, cities and amenities endpoints.
    pub fn catalog_hits(&self) -> u32 {
        self.state.catalog_hits.load(Ordering::SeqCst)
    }
}

/// Start the mock on an ephemeral port.
pub async fn start_mock_api(responses: MockResponses) -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let state = Arc::new(MockState {
        responses,
        search_bodies: Mutex::new(Vec::new()),
        request_ids: Mutex::new(Vec::new()),
        catalog_hits: AtomicU32::new(0),
    });

    let app = Router::new()
        .route("/api/v1/status/", get(status))
        .route("/api/v1/stats", get(stats))
        .route("/api/v1/places_search", post(places_search))
        .route("/api/v1/states", get(states))
        .route("/api/v1/states/{state_id}/cities", get(cities))
        .route("/api/v1/amenities", get(amenities))
        .with_state(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { addr, state }
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn record_request_id(state: &MockState, headers: &HeaderMap) {
    if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        state.request_ids.lock().unwrap().push(id.to_string());
    }
}

async fn status(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Json<Value> {
    record_request_id(&state, &headers);
    Json(state.responses.status.clone())
}

async fn stats(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Json<Value> {
    record_request_id(&state, &headers);
    Json(state.responses.stats.clone())
}

async fn places_search(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    record_request_id(&state, &headers);
    state.search_bodies.lock().unwrap().push(body);

    if state.responses.search_status != StatusCode::OK {
        return Err(state.responses.search_status);
    }
    Ok(Json(state.responses.places.clone()))
}

async fn states(State(state): State<Arc<MockState>>) -> Json<Value> {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    Json(state.responses.states.clone())
}

async fn cities(
    State(state): State<Arc<MockState>>,
    Path(state_id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    state
        .responses
        .cities
        .get(&state_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn amenities(State(state): State<Arc<MockState>>) -> Json<Value> {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    Json(state.responses.amenities.clone())
}

/// A bound listener that never answers; requests to it hang until dropped.
#[allow(dead_code)]
pub async fn silent_listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}
