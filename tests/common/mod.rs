//! In-process photoshoot API used by the integration tests
//!
//! Stores shoots in memory with the same routes and status codes the real
//! service exposes: 201 on create, 404 for unknown ids, 204 on delete.
//! Attaching the same photo twice is idempotent.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Default)]
struct Store {
    next_id: i64,
    shoots: BTreeMap<i64, Shoot>,
}

struct Shoot {
    record: Value,
    photos: BTreeSet<String>,
}

type SharedStore = Arc<Mutex<Store>>;

/// A running fake API bound to an ephemeral local port
pub struct FakePhotoshootApi {
    addr: SocketAddr,
    store: SharedStore,
}

impl FakePhotoshootApi {
    pub async fn start() -> Self {
        let store = SharedStore::default();

        let app = Router::new()
            .route("/photoshoot", get(list_shoots).post(create_shoot))
            .route(
                "/photoshoot/{id}",
                get(read_shoot).put(update_shoot).delete(delete_shoot),
            )
            .route("/photoshoot/{id}/addPhoto/{photo_id}", post(add_photo))
            .route("/photoshoot/{id}/photo", get(list_photos))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API");
        let addr = listener.local_addr().expect("Fake API has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake API stopped");
        });

        Self { addr, store }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn shoot_count(&self) -> usize {
        self.store.lock().unwrap().shoots.len()
    }

    pub fn photos_of(&self, id: i64) -> Vec<String> {
        self.store
            .lock()
            .unwrap()
            .shoots
            .get(&id)
            .map(|s| s.photos.iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn view(id: i64, record: &Value) -> Value {
    let mut view = record.clone();
    view["photoshootID"] = json!(id);
    view
}

async fn list_shoots(State(store): State<SharedStore>) -> Json<Value> {
    let store = store.lock().unwrap();
    let shoots = store
        .shoots
        .iter()
        .map(|(id, shoot)| view(*id, &shoot.record))
        .collect();
    Json(Value::Array(shoots))
}

async fn create_shoot(
    State(store): State<SharedStore>,
    Json(record): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    let body = view(id, &record);
    store.shoots.insert(
        id,
        Shoot {
            record,
            photos: BTreeSet::new(),
        },
    );
    (StatusCode::CREATED, Json(body))
}

async fn read_shoot(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.shoots.get(&id) {
        Some(shoot) => Json(view(id, &shoot.record)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_shoot(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(record): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    match store.shoots.get_mut(&id) {
        Some(shoot) => {
            shoot.record = record;
            Json(view(id, &shoot.record)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_shoot(State(store): State<SharedStore>, Path(id): Path<i64>) -> StatusCode {
    match store.lock().unwrap().shoots.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

async fn add_photo(
    State(store): State<SharedStore>,
    Path((id, photo_id)): Path<(i64, String)>,
) -> StatusCode {
    match store.lock().unwrap().shoots.get_mut(&id) {
        Some(shoot) => {
            shoot.photos.insert(photo_id);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_photos(State(store): State<SharedStore>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.shoots.get(&id) {
        Some(shoot) => Json(json!(shoot.photos)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
