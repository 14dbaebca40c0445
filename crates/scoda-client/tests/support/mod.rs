//! In-process mock of the Scoda backend for integration tests.
//!
//! Serves the real route table on an ephemeral port. Behaviour switches
//! (failing logout, failing save, slow generation, ...) live on
//! [`Backend`] and can be flipped between requests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use scoda_client::{AppState, ClientConfig};
use scoda_shared::{IdeaEdge, IdeaGraph, IdeaNode, NodeKind, UserRecord};
use scoda_store::MemoryStore;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "correct horse";
pub const TOKEN: &str = "tok-ada";

#[derive(Debug, Clone)]
pub struct StoredIdea {
    pub id: String,
    pub topic: String,
    pub graph: IdeaGraph,
}

#[derive(Debug)]
pub struct Backend {
    pub user: UserRecord,
    pub account_exists: bool,
    pub ideas: Vec<StoredIdea>,
    /// Method and path of every request received, in order.
    pub requests: Vec<String>,
    /// `Authorization` header of every logout request.
    pub logout_authorization: Vec<Option<String>>,
    pub fail_logout: bool,
    pub fail_save: bool,
    pub fail_delete: bool,
    /// Answer deletes of unknown ids with success instead of 404.
    pub accept_unknown_delete: bool,
    /// Omit `remainingCredits` from generation replies.
    pub omit_remaining_credits: bool,
    pub generate_delay: Option<Duration>,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            user: UserRecord {
                id: "user-1".into(),
                name: "Ada".into(),
                email: EMAIL.into(),
                credits: Some(10),
            },
            account_exists: true,
            ideas: Vec::new(),
            requests: Vec::new(),
            logout_authorization: Vec::new(),
            fail_logout: false,
            fail_save: false,
            fail_delete: false,
            accept_unknown_delete: false,
            omit_remaining_credits: false,
            generate_delay: None,
        }
    }
}

impl Backend {
    pub fn requested(&self, prefix: &str) -> usize {
        self.requests.iter().filter(|r| r.starts_with(prefix)).count()
    }
}

type Shared = Arc<Mutex<Backend>>;

pub struct MockBackend {
    pub url: String,
    state: Shared,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(Backend::default()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap()
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_api_url(self.url.clone())
    }

    /// A fully wired client with in-memory session storage.
    pub fn app(&self, storage: Arc<MemoryStore>) -> AppState {
        AppState::with_storage(self.config(), storage).unwrap()
    }

    pub fn add_idea(&self, topic: &str) -> String {
        let id = Uuid::new_v4().simple().to_string();
        self.backend().ideas.push(StoredIdea {
            id: id.clone(),
            topic: topic.into(),
            graph: sample_graph(topic),
        });
        id
    }
}

/// One pillar with two content plans and a related idea.
pub fn sample_graph(topic: &str) -> IdeaGraph {
    let mut pillar = IdeaNode::new("n-main", format!("{topic}: pillar"), NodeKind::Main);
    pillar.category = Some("Education".into());

    let mut reel = IdeaNode::new("n-reel", "Morning routine reel", NodeKind::Sub);
    reel.platform = Some("Instagram".into());
    reel.format = Some("Reel".into());
    reel.hook = Some("Stop scrolling".into());
    reel.script = Some("Shot 1: alarm\nShot 2: workout".into());
    reel.hashtags = Some(vec!["#fitness".into(), "#coach".into()]);

    let mut carousel = IdeaNode::new("n-carousel", "Myth busting carousel", NodeKind::Sub);
    carousel.platform = Some("Instagram".into());
    carousel.format = Some("Carousel".into());
    carousel.caption = Some("Five myths".into());

    let related = IdeaNode::new("n-related", "Meal prep", NodeKind::Related);

    let edge = |id: &str, source: &str, target: &str, kind| IdeaEdge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        kind,
        weight: None,
    };

    IdeaGraph {
        nodes: vec![pillar, reel, carousel, related],
        edges: vec![
            edge("e1", "n-main", "n-reel", scoda_shared::EdgeKind::Hierarchical),
            edge("e2", "n-main", "n-carousel", scoda_shared::EdgeKind::Hierarchical),
            edge("e3", "n-main", "n-related", scoda_shared::EdgeKind::Related),
        ],
        metadata: None,
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/auth/profile", put(update_profile))
        .route("/auth/logout", post(logout))
        .route("/auth/account", delete(delete_account))
        .route("/generate-ideas", post(generate))
        .route("/ideas", post(save_idea).get(list_ideas))
        .route("/ideas/{id}", delete(delete_idea))
        .route("/ideas/{id}/refine", post(refine_idea))
        .route("/insights/stats", get(stats))
        .route("/insights/activity", get(activity))
        .route("/insights/categories", get(categories))
        .route("/insights/most-active", get(most_active))
        .with_state(state)
}

fn record(state: &Shared, line: String) -> MutexGuard<'_, Backend> {
    let mut backend = state.lock().unwrap();
    backend.requests.push(line);
    backend
}

fn authorized(headers: &HeaderMap, backend: &Backend) -> bool {
    backend.account_exists
        && headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn error(status: StatusCode, message: Value) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, json!("Invalid or expired token"))
}

fn flat_idea(idea: &StoredIdea) -> Value {
    let now = Utc::now();
    json!({
        "_id": idea.id,
        "topic": idea.topic,
        "nodes": idea.graph.nodes,
        "edges": idea.graph.edges,
        "createdAt": now,
        "updatedAt": now,
    })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn signup(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = record(&state, "POST /auth/signup".into());
    let email = body["email"].as_str().unwrap_or_default();
    if !email.contains('@') {
        return error(
            StatusCode::BAD_REQUEST,
            json!(["email must be an email", "password is too short"]),
        );
    }
    backend.user = UserRecord {
        id: "user-2".into(),
        name: body["name"].as_str().unwrap_or_default().into(),
        email: email.into(),
        credits: Some(10),
    };
    backend.account_exists = true;
    Json(json!({ "user": backend.user, "token": TOKEN })).into_response()
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let backend = record(&state, "POST /auth/login".into());
    if body["email"] == EMAIL && body["password"] == PASSWORD && backend.account_exists {
        Json(json!({ "user": backend.user, "token": TOKEN })).into_response()
    } else {
        error(StatusCode::UNAUTHORIZED, json!("Invalid credentials"))
    }
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /auth/me".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!(backend.user)).into_response()
}

async fn update_profile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = record(&state, "PUT /auth/profile".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    if let Some(name) = body["name"].as_str() {
        backend.user.name = name.into();
    }
    if let Some(email) = body["email"].as_str() {
        backend.user.email = email.into();
    }
    // Profile replies carry no credit balance.
    Json(json!({
        "_id": backend.user.id,
        "name": backend.user.name,
        "email": backend.user.email,
    }))
    .into_response()
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut backend = record(&state, "POST /auth/logout".into());
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    backend.logout_authorization.push(header);
    if backend.fail_logout {
        return error(StatusCode::INTERNAL_SERVER_ERROR, json!("Session store offline"));
    }
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!({ "message": "Logged out" })).into_response()
}

async fn delete_account(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut backend = record(&state, "DELETE /auth/account".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    backend.account_exists = false;
    backend.ideas.clear();
    StatusCode::NO_CONTENT.into_response()
}

async fn generate(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let delay = {
        let backend = record(&state, "POST /generate-ideas".into());
        if !authorized(&headers, &backend) {
            return error(StatusCode::UNAUTHORIZED, json!("Sign in to generate plans"));
        }
        backend.generate_delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let mut backend = state.lock().unwrap();
    let topic = body["topic"].as_str().unwrap_or_default().to_string();
    let remaining = backend.user.credits.unwrap_or(0).saturating_sub(1);
    backend.user.credits = Some(remaining);

    let mut reply = json!({
        "graph": sample_graph(&topic),
        "creditsUsed": 1,
    });
    if !backend.omit_remaining_credits {
        reply["remainingCredits"] = json!(remaining);
    }
    Json(reply).into_response()
}

async fn save_idea(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = record(&state, "POST /ideas".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    if backend.fail_save {
        return error(StatusCode::INTERNAL_SERVER_ERROR, json!("Database unavailable"));
    }

    let graph = match serde_json::from_value::<IdeaGraph>(body.clone()) {
        Ok(graph) => graph,
        Err(e) => return error(StatusCode::BAD_REQUEST, json!(e.to_string())),
    };
    let idea = StoredIdea {
        id: Uuid::new_v4().simple().to_string(),
        topic: body["topic"].as_str().unwrap_or_default().into(),
        graph,
    };
    let reply = flat_idea(&idea);
    backend.ideas.push(idea);
    (StatusCode::CREATED, Json(reply)).into_response()
}

async fn list_ideas(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /ideas".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    let now = Utc::now();
    let ideas: Vec<Value> = backend
        .ideas
        .iter()
        .map(|idea| {
            json!({
                "id": idea.id,
                "topic": idea.topic,
                "graph": idea.graph,
                "createdAt": now,
                "updatedAt": now,
            })
        })
        .collect();
    Json(ideas).into_response()
}

async fn delete_idea(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = record(&state, format!("DELETE /ideas/{id}"));
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    if backend.fail_delete {
        return error(StatusCode::INTERNAL_SERVER_ERROR, json!("Delete failed upstream"));
    }
    let before = backend.ideas.len();
    backend.ideas.retain(|idea| idea.id != id);
    if backend.ideas.len() == before && !backend.accept_unknown_delete {
        return error(StatusCode::NOT_FOUND, json!("Idea not found"));
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn refine_idea(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = record(&state, format!("POST /ideas/{id}/refine"));
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    let Some(idea) = backend.ideas.iter_mut().find(|idea| idea.id == id) else {
        return error(StatusCode::NOT_FOUND, json!("Idea not found"));
    };
    let mut extra = IdeaNode::new("n-refined", "Behind the scenes story", NodeKind::Sub);
    extra.format = Some("Story".into());
    idea.graph.nodes.push(extra);
    Json(flat_idea(idea)).into_response()
}

async fn stats(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /insights/stats".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!({
        "totalIdeas": backend.ideas.len(),
        "totalNodes": backend.ideas.iter().map(|i| i.graph.nodes.len()).sum::<usize>(),
        "avgNodesPerIdea": 4.0,
        "mostUsedCategory": "Education",
        "ideasThisWeek": backend.ideas.len(),
        "creditsUsed": 3,
        "remainingCredits": backend.user.credits.unwrap_or(0),
    }))
    .into_response()
}

async fn activity(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /insights/activity".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!([
        { "day": "Mon", "ideas": 1 },
        { "day": "Tue", "ideas": 4 },
        { "day": "Wed", "ideas": 0 },
    ]))
    .into_response()
}

async fn categories(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /insights/categories".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!([
        { "name": "Education", "value": 75.0, "count": 3 },
        { "name": "Lifestyle", "value": 25.0, "count": 1 },
    ]))
    .into_response()
}

async fn most_active(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let backend = record(&state, "GET /insights/most-active".into());
    if !authorized(&headers, &backend) {
        return unauthorized();
    }
    Json(json!([{ "name": "Education", "count": 3 }])).into_response()
}

/// A client already signed in as the default user.
pub async fn signed_in(mock: &MockBackend) -> (AppState, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let app = mock.app(storage.clone());
    app.auth.initialize().await;
    app.auth.login(EMAIL, PASSWORD).await.unwrap();
    (app, storage)
}
