//! Common test utilities: an in-memory back-office behind the `Transport` seam.
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use async_trait::async_trait;
use flora_admin::api::{ApiRequest, ApiResponse, Transport, TransportError};
use flora_admin::reorder::{BusyPolicy, ReorderGate, SwapPersistence};
use flora_admin::session::{Session, SessionStore};
use flora_admin::{ApiClient, ListScreen, NotificationCenter, Notifier, Resource};
use http::{Method, StatusCode};
use serde_json::{json, Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const TEST_TOKEN: &str = "test-token";
const PREFIX: &str = "/api/admin/";

/// An injected one-shot failure.
#[derive(Debug, Clone)]
pub enum Failure {
    Network,
    Status(StatusCode, Value),
}

#[derive(Debug, Clone)]
struct Trap {
    method: Method,
    path_suffix: String,
    failure: Failure,
}

/// Rows per entity path, listed sorted by `display_order` when present.
pub struct FakeBackend {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    enveloped: Mutex<HashSet<String>>,
    traps: Mutex<Vec<Trap>>,
    calls: Mutex<Vec<ApiRequest>>,
    required_token: Mutex<Option<String>>,
    write_delay: Mutex<Option<Duration>>,
    next_id: AtomicI64,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            enveloped: Mutex::new(HashSet::new()),
            traps: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            required_token: Mutex::new(Some(TEST_TOKEN.to_string())),
            write_delay: Mutex::new(None),
            next_id: AtomicI64::new(100),
        }
    }
}

impl FakeBackend {
    pub async fn seed(&self, entity: &str, rows: Vec<Value>) {
        self.collections
            .lock()
            .await
            .insert(entity.to_string(), rows);
    }

    /// Answer list calls for `entity` with `{success: true, data: [...]}`.
    pub async fn use_envelope(&self, entity: &str) {
        self.enveloped.lock().await.insert(entity.to_string());
    }

    pub async fn fail_next(&self, method: Method, path_suffix: &str, failure: Failure) {
        self.traps.lock().await.push(Trap {
            method,
            path_suffix: path_suffix.to_string(),
            failure,
        });
    }

    pub async fn require_token(&self, token: Option<&str>) {
        *self.required_token.lock().await = token.map(ToString::to_string);
    }

    pub async fn slow_writes(&self, delay: Duration) {
        *self.write_delay.lock().await = Some(delay);
    }

    pub async fn calls(&self) -> Vec<(Method, String)> {
        self.calls
            .lock()
            .await
            .iter()
            .map(|call| (call.method.clone(), call.path.clone()))
            .collect()
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.calls.lock().await.clone()
    }

    pub async fn write_count(&self) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.method != Method::GET)
            .count()
    }

    pub async fn rows(&self, entity: &str) -> Vec<Value> {
        sorted(self.collections.lock().await.get(entity).cloned().unwrap_or_default())
    }

    /// `(id, display_order)` pairs, sorted by id.
    pub async fn orders(&self, entity: &str) -> Vec<(i64, u64)> {
        let mut pairs: Vec<(i64, u64)> = self
            .rows(entity)
            .await
            .iter()
            .map(|row| (row["id"].as_i64().unwrap(), row["display_order"].as_u64().unwrap()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    async fn spring_trap(&self, request: &ApiRequest) -> Option<Failure> {
        let mut traps = self.traps.lock().await;
        let index = traps
            .iter()
            .position(|trap| trap.method == request.method && request.path.ends_with(&trap.path_suffix))?;
        Some(traps.remove(index).failure)
    }

    async fn route(&self, request: &ApiRequest) -> ApiResponse {
        let Some(rest) = request.path.strip_prefix(PREFIX) else {
            return respond(StatusCode::NOT_FOUND, json!({"message": "Unknown route"}));
        };
        let segments: Vec<&str> = rest.split('/').collect();
        let body = request.body.clone().unwrap_or(Value::Null);
        let mut collections = self.collections.lock().await;

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", [entity]) => {
                let rows = Value::Array(sorted(collections.get(*entity).cloned().unwrap_or_default()));
                if self.enveloped.lock().await.contains(*entity) {
                    respond(StatusCode::OK, json!({"success": true, "data": rows}))
                } else {
                    respond(StatusCode::OK, rows)
                }
            }
            ("GET", [entity, id]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                match find(rows, id) {
                    Some(index) => respond(StatusCode::OK, rows[index].clone()),
                    None => not_found(entity),
                }
            }
            ("POST", [entity]) => {
                let Value::Object(mut fields) = body else {
                    return respond(StatusCode::BAD_REQUEST, json!({"message": "Expected an object"}));
                };
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let id = if *entity == "users" {
                    json!(uuid::Uuid::new_v4().to_string())
                } else {
                    json!(id)
                };
                fields.insert("id".to_string(), id);
                let row = Value::Object(fields);
                collections.entry((*entity).to_string()).or_default().push(row.clone());
                respond(StatusCode::CREATED, json!({"success": true, "data": row}))
            }
            ("PUT", [entity, id]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                let Some(index) = find(rows, id) else {
                    return not_found(entity);
                };
                if let (Value::Object(row), Value::Object(fields)) = (&mut rows[index], body) {
                    row.extend(fields.into_iter().filter(|(key, _)| key != "id"));
                }
                respond(StatusCode::OK, json!({"success": true}))
            }
            ("DELETE", [entity, id]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                let Some(index) = find(rows, id) else {
                    return not_found(entity);
                };
                rows.remove(index);
                respond(StatusCode::OK, Value::Null)
            }
            ("PATCH", [entity, "reorder"]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                for assignment in body.as_array().cloned().unwrap_or_default() {
                    let id = assignment["id"].to_string();
                    if let Some(index) = find(rows, &id) {
                        rows[index]["display_order"] = assignment["display_order"].clone();
                    }
                }
                respond(StatusCode::OK, json!({"success": true}))
            }
            ("PATCH", [entity, id, "display-order"]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                let Some(index) = find(rows, id) else {
                    return not_found(entity);
                };
                let target = body["display_order"].as_u64().unwrap();
                move_to_position(rows, index, target);
                respond(StatusCode::OK, json!({"success": true}))
            }
            ("PATCH", [entity, id, field @ ("status" | "featured")]) => {
                let rows = collections.entry((*entity).to_string()).or_default();
                let Some(index) = find(rows, id) else {
                    return not_found(entity);
                };
                let key = if *field == "status" { "status" } else { "is_featured" };
                rows[index][key] = body[key].clone();
                respond(StatusCode::OK, Value::Null)
            }
            _ => respond(StatusCode::NOT_FOUND, json!({"message": "Unknown route"})),
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.lock().await.push(request.clone());

        if request.method != Method::GET {
            let delay = *self.write_delay.lock().await;
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
        }
        if let Some(failure) = self.spring_trap(&request).await {
            return match failure {
                Failure::Network => Err(TransportError("connection refused".to_string())),
                Failure::Status(status, body) => Ok(respond(status, body)),
            };
        }
        let required = self.required_token.lock().await.clone();
        if required.is_some() && request.bearer != required {
            return Ok(respond(StatusCode::UNAUTHORIZED, json!({"message": "Unauthorized"})));
        }
        Ok(self.route(&request).await)
    }
}

fn respond(status: StatusCode, body: Value) -> ApiResponse {
    ApiResponse::new(status, body)
}

fn not_found(entity: &str) -> ApiResponse {
    respond(StatusCode::NOT_FOUND, json!({"message": format!("No such row in {entity}")}))
}

fn find(rows: &[Value], id: &str) -> Option<usize> {
    let wanted = id.trim_matches('"');
    rows.iter().position(|row| match &row["id"] {
        Value::String(text) => text == wanted,
        other => other.to_string() == wanted,
    })
}

fn sorted(mut rows: Vec<Value>) -> Vec<Value> {
    rows.sort_by_key(|row| row.get("display_order").and_then(Value::as_u64).unwrap_or(0));
    rows
}

/// Put the row at `index` on `target`, shifting the rows in between by one.
fn move_to_position(rows: &mut [Value], index: usize, target: u64) {
    let current = rows[index]["display_order"].as_u64().unwrap_or(target);
    for (i, row) in rows.iter_mut().enumerate() {
        if i == index {
            continue;
        }
        let Some(order) = row["display_order"].as_u64() else {
            continue;
        };
        if target < current && (target..current).contains(&order) {
            row["display_order"] = json!(order + 1);
        } else if target > current && (current + 1..=target).contains(&order) {
            row["display_order"] = json!(order - 1);
        }
    }
    rows[index]["display_order"] = json!(target);
}

/// Client, backend and notification sink wired together.
pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub session: Arc<SessionStore>,
    pub client: ApiClient,
    pub notifier: Arc<NotificationCenter>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_session(Session {
            token: Some(TEST_TOKEN.to_string()),
            ..Session::default()
        })
    }

    pub fn with_session(session: Session) -> Self {
        let backend = Arc::new(FakeBackend::default());
        let session = Arc::new(SessionStore::in_memory(session));
        let transport: Arc<dyn Transport> = backend.clone();
        let client = ApiClient::new(transport, Arc::clone(&session));
        Self {
            backend,
            session,
            client,
            notifier: Arc::new(NotificationCenter::new()),
        }
    }

    pub fn screen<E: Resource>(&self) -> ListScreen<E> {
        self.screen_with(BusyPolicy::Queue, SwapPersistence::Batched)
    }

    pub fn screen_with<E: Resource>(&self, policy: BusyPolicy, persistence: SwapPersistence) -> ListScreen<E> {
        let notifier: Arc<dyn Notifier> = self.notifier.clone();
        ListScreen::new(self.client.clone(), notifier)
            .with_reorder(Arc::new(ReorderGate::new(policy)), persistence)
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifier.drain().into_iter().map(|n| n.message).collect()
    }
}

pub fn faq(id: i64, display_order: u32) -> Value {
    json!({
        "id": id,
        "question": format!("Question {id}"),
        "answer": format!("Answer {id}"),
        "category": "general",
        "display_order": display_order,
    })
}

pub fn contact_info(id: i64, display_order: u32) -> Value {
    json!({
        "id": id,
        "info_type": "phone",
        "value": format!("+33 1 23 45 67 0{id}"),
        "display_order": display_order,
    })
}

pub fn order(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "customer_name": format!("Client {id}"),
        "customer_email": format!("client{id}@example.fr"),
        "total": 49.9,
        "status": status,
    })
}

pub fn product(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "price": 19.5,
        "stock": 3,
        "is_featured": false,
    })
}

/// Object body with `field` removed, for building invalid payloads.
pub fn without(mut value: Value, field: &str) -> Value {
    if let Value::Object(map) = &mut value {
        map.remove(field);
    }
    value
}

pub fn object(value: &Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}
