//! In-process stand-in for the backend REST API.
//!
//! Serves `/{collection}` and `/{collection}/{id}` from memory on an
//! ephemeral port, assigning ids the way a JSON document store does.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::Mutex;

const COLLECTIONS: &[&str] = &["filmes", "salas", "sessoes", "ingressos"];

#[derive(Default)]
struct Store {
    next_id: u64,
    records: HashMap<String, Vec<Value>>,
    forced_status: Option<StatusCode>,
    canned_body: Option<Value>,
}

type SharedStore = Arc<Mutex<Store>>;

/// A running stub backend.
pub struct StubBackend {
    pub base_url: String,
    store: SharedStore,
}

impl StubBackend {
    /// Raw JSON records currently stored in `collection`.
    pub async fn records(&self, collection: &str) -> Vec<Value> {
        let store = self.store.lock().await;
        store.records.get(collection).cloned().unwrap_or_default()
    }

    /// Answer every subsequent request with `status`.
    pub async fn fail_with(&self, status: StatusCode) {
        self.store.lock().await.forced_status = Some(status);
    }

    /// Answer every subsequent list or create with `200 OK` and `body`,
    /// whatever shape the client expects.
    pub async fn respond_with(&self, body: Value) {
        self.store.lock().await.canned_body = Some(body);
    }
}

/// Start a stub backend on `127.0.0.1` with an OS-assigned port.
pub async fn spawn_backend() -> StubBackend {
    let store = SharedStore::default();

    let app = Router::new()
        .route("/{collection}", get(list).post(create))
        .route("/{collection}/{id}", delete(remove))
        .with_state(Arc::clone(&store));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend crashed");
    });

    StubBackend {
        base_url: format!("http://{addr}"),
        store,
    }
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    drop(listener);
    addr
}

fn check(store: &Store, collection: &str) -> Result<(), StatusCode> {
    if let Some(status) = store.forced_status {
        return Err(status);
    }
    if !COLLECTIONS.contains(&collection) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(())
}

async fn list(
    State(store): State<SharedStore>,
    Path(collection): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = store.lock().await;
    check(&store, &collection)?;
    if let Some(body) = &store.canned_body {
        return Ok(Json(body.clone()));
    }
    let records = store.records.get(&collection).cloned().unwrap_or_default();
    Ok(Json(Value::Array(records)))
}

/// `Json` only accepts `application/json` bodies, so this also checks the
/// client's content type.
async fn create(
    State(store): State<SharedStore>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut store = store.lock().await;
    check(&store, &collection)?;
    if let Some(canned) = &store.canned_body {
        return Ok((StatusCode::OK, Json(canned.clone())));
    }

    store.next_id += 1;
    let id = format!("{:04x}", store.next_id);
    let object = body.as_object_mut().ok_or(StatusCode::BAD_REQUEST)?;
    object.insert("id".into(), Value::String(id));

    store.records.entry(collection).or_default().push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn remove(
    State(store): State<SharedStore>,
    Path((collection, id)): Path<(String, String)>,
) -> StatusCode {
    let mut store = store.lock().await;
    if let Err(status) = check(&store, &collection) {
        return status;
    }

    let records = store.records.entry(collection).or_default();
    match records.iter().position(|r| r["id"] == id.as_str()) {
        Some(index) => {
            records.remove(index);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}
