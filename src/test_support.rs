// src/test_support.rs
// =============================================================================
// Helpers shared by the async tests.
//
// spawn_upstream() starts a tiny axum server on 127.0.0.1 that plays the
// upstream project source: it answers GET /users/:account/projects with a
// fixed status and JSON body and counts how often it was asked.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct UpstreamReply {
    status: StatusCode,
    body: Value,
}

impl UpstreamReply {
    pub fn ok(body: Value) -> Self {
        Self::status(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

struct StubState {
    reply: UpstreamReply,
    hits: AtomicUsize,
}

pub struct Upstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl Upstream {
    /// Number of requests the stub has answered
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn projects_stub(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.reply.status, Json(state.reply.body.clone()))
}

pub async fn spawn_upstream(reply: UpstreamReply) -> Upstream {
    let state = Arc::new(StubState {
        reply,
        hits: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/users/:account/projects", get(projects_stub))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{address}"),
        state,
    }
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

/// Four projects covering every view the tests look at
pub fn sample_projects_json() -> Value {
    json!([
        {
            "id": "tiny-lisp",
            "name": "tiny-lisp",
            "description": "A lisp in a weekend",
            "githubUrl": "https://github.com/someone/tiny-lisp",
            "metadata": {
                "status": "active",
                "categories": ["now", "featured"],
                "tags": ["lang"],
                "type": "tool",
                "priority": 1
            },
            "faces": {
                "tech": { "mainLanguage": "Rust" },
                "demo": { "url": "https://tiny-lisp.example.com" }
            }
        },
        {
            "id": "gridwalk",
            "name": "gridwalk",
            "description": "Pathfinding toy",
            "githubUrl": "https://github.com/someone/gridwalk",
            "metadata": {
                "status": "paused",
                "categories": ["sketches"],
                "tags": ["algorithms"],
                "type": "library",
                "priority": 3
            }
        },
        {
            "id": "pixel-garden",
            "name": "pixel-garden",
            "description": "Generative plants",
            "githubUrl": "https://github.com/someone/pixel-garden",
            "metadata": {
                "status": "completed",
                "categories": ["creations", "open-source"],
                "tags": [],
                "type": "app"
            },
            "faces": { "tech": { "mainLanguage": "TypeScript" } }
        },
        {
            "id": "port-knock",
            "name": "port-knock",
            "description": "Knock sequence daemon",
            "githubUrl": "https://github.com/someone/port-knock",
            "metadata": {
                "status": "archived",
                "categories": ["secumilate-eligible"],
                "tags": ["security", "networking"],
                "type": "tool",
                "priority": 2
            }
        }
    ])
}
