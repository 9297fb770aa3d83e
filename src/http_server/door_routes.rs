//! Door routes
//!
//! The five CRUD handlers over the "doors" collection. Records are untyped
//! JSON objects; the only field the server owns is `id`, generated as a
//! UUID at creation and never changed afterwards.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::store::Store;

use super::errors::{ApiError, ApiResult};

/// Collection key under which doors live in the document
pub const DOORS: &str = "doors";

/// Shared state for the door routes
pub struct DoorState {
    store: Store,
    /// Serializes every load-mutate-save sequence. Without it, two
    /// concurrent writers each re-read the file and the later save drops
    /// the earlier one's changes.
    write_lock: Mutex<()>,
}

impl DoorState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

/// Create the door routes
pub fn door_routes(state: Arc<DoorState>) -> Router {
    Router::new()
        .route("/doors", get(list_doors_handler))
        .route("/doors", post(create_door_handler))
        .route("/doors/:id", get(get_door_handler))
        .route("/doors/:id", put(update_door_handler))
        .route("/doors/:id", delete(delete_door_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Textual form of an id value: strings as-is, anything else as its
/// compact JSON text. Path parameters always arrive as strings, so a
/// record whose id is the number 7 still matches the segment "7".
fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether `record` carries the id `id`. Records without an id field
/// match nothing.
fn has_id(record: &Value, id: &str) -> bool {
    record.get("id").map(|v| id_text(v) == id).unwrap_or(false)
}

/// The caller-supplied fields of a request body. Non-object bodies
/// contribute no fields, and `id` is never the caller's to set.
fn body_fields(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(mut fields) => {
            fields.remove("id");
            fields
        }
        _ => Map::new(),
    }
}

// ==================
// Handlers
// ==================

/// GET /doors - the full ordered list, empty on storage failure
async fn list_doors_handler(State(state): State<Arc<DoorState>>) -> Json<Vec<Value>> {
    Json(state.store.load(DOORS))
}

/// GET /doors/:id
async fn get_door_handler(
    State(state): State<Arc<DoorState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .store
        .load(DOORS)
        .into_iter()
        .find(|door| has_id(door, &id))
        .map(Json)
        .ok_or(ApiError::DoorNotFound)
}

/// POST /doors - append `{id: <uuid>, ...body}` to the collection
async fn create_door_handler(
    State(state): State<Arc<DoorState>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let _guard = state.write_lock.lock().await;

    let mut doors = state.store.load(DOORS);

    let mut door = Map::new();
    door.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    door.extend(body_fields(body));
    let door = Value::Object(door);

    doors.push(door.clone());
    state.store.save(DOORS, doors)?;

    Ok((StatusCode::CREATED, Json(door)))
}

/// PUT /doors/:id - shallow merge, body wins on conflicts
async fn update_door_handler(
    State(state): State<Arc<DoorState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let _guard = state.write_lock.lock().await;

    let mut doors = state.store.load(DOORS);
    let index = doors
        .iter()
        .position(|door| has_id(door, &id))
        .ok_or(ApiError::DoorNotFound)?;

    // Shallow merge: an incoming field replaces the existing one
    // wholesale, nested objects included
    if let Value::Object(existing) = &mut doors[index] {
        existing.extend(body_fields(body));
    }
    let updated = doors[index].clone();

    state.store.save(DOORS, doors)?;

    Ok(Json(updated))
}

/// DELETE /doors/:id - remove the record and return it
async fn delete_door_handler(
    State(state): State<Arc<DoorState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let _guard = state.write_lock.lock().await;

    let mut doors = state.store.load(DOORS);
    let index = doors
        .iter()
        .position(|door| has_id(door, &id))
        .ok_or(ApiError::DoorNotFound)?;

    let removed = doors.remove(index);
    state.store.save(DOORS, doors)?;

    Ok(Json(removed))
}
