//! In-process mock backend for client tests
//!
//! Stands up the tracker REST surface on an ephemeral port: generic CRUD,
//! the favorite/seed/attempt/resolve actions, the DSA review reads, and
//! the analytics aggregates, all over one id-keyed JSON store. Tests point
//! a [`Transport`] at `base_url` and exercise the real HTTP path.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use crate::transport::Transport;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Default)]
struct Store {
    next_id: i64,
    items: HashMap<String, BTreeMap<i64, Value>>,
}

impl Store {
    fn insert(&mut self, segment: &str, mut item: Value) -> Value {
        self.next_id += 1;
        item["id"] = json!(self.next_id);
        if item.get("createdAt").map_or(true, Value::is_null) {
            item["createdAt"] = json!(Utc::now().to_rfc3339());
        }
        self.items
            .entry(segment.to_string())
            .or_default()
            .insert(self.next_id, item.clone());
        item
    }

    fn segment(&self, segment: &str) -> Vec<Value> {
        self.items
            .get(segment)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default()
    }

    fn get_mut(&mut self, segment: &str, id: i64) -> Option<&mut Value> {
        self.items.get_mut(segment)?.get_mut(&id)
    }
}

struct ApiState {
    store: Mutex<Store>,
    analytics_down: AtomicBool,
}

/// Handle to a spawned mock API. The server task lives until the test's
/// runtime shuts down.
pub struct MockApi {
    pub base_url: String,
    state: Arc<ApiState>,
}

impl MockApi {
    pub async fn spawn() -> Self {
        let state = Arc::new(ApiState {
            store: Mutex::new(Store::default()),
            analytics_down: AtomicBool::new(false),
        });

        let app = Router::new()
            .route("/api/analytics/dashboard", get(dashboard))
            .route("/api/analytics/dsa", get(dsa_breakdown))
            .route("/api/analytics/interviews", get(interview_breakdown))
            .route("/api/analytics/weak-areas", get(weak_area_breakdown))
            .route("/api/dsa/needs-review", get(needs_review))
            .route("/api/dsa/favorites", get(favorites))
            .route("/api/dsa/categories", get(categories))
            .route("/api/dsa/{id}/attempt", post(record_attempt))
            .route("/api/weakarea/{id}/resolve", post(resolve_area))
            .route("/api/{segment}", get(list_items).post(create_item))
            .route("/api/{segment}/seed", post(seed_segment))
            .route(
                "/api/{segment}/{id}",
                put(update_item).delete(delete_item),
            )
            .route("/api/{segment}/{id}/favorite", post(toggle_favorite))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api serve");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// Make the analytics dashboard answer 500 from now on.
    pub fn fail_analytics(&self) {
        self.state.analytics_down.store(true, Ordering::SeqCst);
    }

    pub fn transport(&self) -> Transport {
        Transport::new(self.base_url.as_str())
    }
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

fn matches_filters(item: &Value, params: &HashMap<String, String>) -> bool {
    params.iter().all(|(key, want)| match key.as_str() {
        // Range filters compare against the session start timestamp
        "from" => item["startedAt"].as_str().is_some_and(|at| at >= want.as_str()),
        "to" => item["startedAt"].as_str().is_some_and(|at| at <= want.as_str()),
        _ => match item.get(key) {
            Some(Value::String(have)) => have == want,
            Some(Value::Bool(have)) => want.parse::<bool>().is_ok_and(|w| w == *have),
            Some(Value::Number(have)) => have.to_string() == *want,
            _ => false,
        },
    })
}

async fn list_items(
    State(state): State<Arc<ApiState>>,
    Path(segment): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let store = state.store.lock().unwrap();
    let items: Vec<Value> = store
        .segment(&segment)
        .into_iter()
        .filter(|item| matches_filters(item, &params))
        .collect();
    Json(Value::Array(items))
}

async fn create_item(
    State(state): State<Arc<ApiState>>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult {
    if body.get("title").and_then(Value::as_str) == Some("") {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "title is required" })),
        ));
    }
    let mut store = state.store.lock().unwrap();
    Ok(Json(store.insert(&segment, body)))
}

async fn update_item(
    State(state): State<Arc<ApiState>>,
    Path((segment, id)): Path<(String, i64)>,
    Json(mut body): Json<Value>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let mut store = state.store.lock().unwrap();
    let item = store.get_mut(&segment, id).ok_or_else(not_found)?;
    // Full replace: the stored record becomes exactly the payload plus id
    body["id"] = json!(id);
    *item = body;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(state): State<Arc<ApiState>>,
    Path((segment, id)): Path<(String, i64)>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let mut store = state.store.lock().unwrap();
    let removed = store
        .items
        .get_mut(&segment)
        .and_then(|items| items.remove(&id));
    match removed {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found()),
    }
}

async fn toggle_favorite(
    State(state): State<Arc<ApiState>>,
    Path((segment, id)): Path<(String, i64)>,
) -> ApiResult {
    let mut store = state.store.lock().unwrap();
    let item = store.get_mut(&segment, id).ok_or_else(not_found)?;
    let flipped = !item["isFavorite"].as_bool().unwrap_or(false);
    item["isFavorite"] = json!(flipped);
    Ok(Json(item.clone()))
}

async fn seed_segment(Path(segment): Path<String>) -> Json<Value> {
    Json(json!({ "message": format!("Seeded demo data for {segment}") }))
}

async fn record_attempt(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(attempt): Json<Value>,
) -> ApiResult {
    let mut store = state.store.lock().unwrap();
    let item = store.get_mut("dsa", id).ok_or_else(not_found)?;
    item["status"] = attempt["status"].clone();
    let count = item["attemptCount"].as_i64().unwrap_or(0) + 1;
    item["attemptCount"] = json!(count);
    item["lastReviewedAt"] = json!(Utc::now().to_rfc3339());
    item["nextReviewDate"] = json!((Utc::now() + Duration::days(3)).to_rfc3339());
    Ok(Json(item.clone()))
}

async fn resolve_area(State(state): State<Arc<ApiState>>, Path(id): Path<i64>) -> ApiResult {
    let mut store = state.store.lock().unwrap();
    let item = store.get_mut("weakarea", id).ok_or_else(not_found)?;
    item["resolved"] = json!(true);
    item["resolvedAt"] = json!(Utc::now().to_rfc3339());
    Ok(Json(item.clone()))
}

async fn needs_review(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    let due: Vec<Value> = store
        .segment("dsa")
        .into_iter()
        .filter(|item| item["status"].as_str() != Some("Solved"))
        .collect();
    Json(Value::Array(due))
}

async fn favorites(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    let starred: Vec<Value> = store
        .segment("dsa")
        .into_iter()
        .filter(|item| item["isFavorite"].as_bool().unwrap_or(false))
        .collect();
    Json(Value::Array(starred))
}

async fn categories(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    let mut names: Vec<String> = store
        .segment("dsa")
        .into_iter()
        .filter_map(|item| item["category"].as_str().map(str::to_string))
        .collect();
    names.sort();
    names.dedup();
    Json(json!(names))
}

async fn dashboard(State(state): State<Arc<ApiState>>) -> ApiResult {
    if state.analytics_down.load(Ordering::SeqCst) {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "analytics offline" })),
        ));
    }

    let store = state.store.lock().unwrap();
    let problems = store.segment("dsa");
    let solved = problems
        .iter()
        .filter(|item| item["status"].as_str() == Some("Solved"))
        .count();
    let rate = if problems.is_empty() {
        0.0
    } else {
        solved as f64 * 100.0 / problems.len() as f64
    };
    let open_areas = store
        .segment("weakarea")
        .into_iter()
        .filter(|item| !item["resolved"].as_bool().unwrap_or(false))
        .count();

    Ok(Json(json!({
        "totalProblems": problems.len(),
        "solvedProblems": solved,
        "completionRate": rate,
        "activeWeakAreas": open_areas,
    })))
}

async fn dsa_breakdown(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    Json(json!({ "totalProblems": store.segment("dsa").len() }))
}

async fn interview_breakdown(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    Json(json!({ "totalInterviews": store.segment("interview").len() }))
}

async fn weak_area_breakdown(State(state): State<Arc<ApiState>>) -> Json<Value> {
    let store = state.store.lock().unwrap();
    Json(json!({ "totalWeakAreas": store.segment("weakarea").len() }))
}
