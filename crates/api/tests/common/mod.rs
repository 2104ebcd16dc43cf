#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use autolot_api::config::ServerConfig;
use autolot_api::router::build_app_router;
use autolot_api::state::AppState;

/// Cookie header value that passes the admin gate.
pub const ADMIN_COOKIE: &str = "admin_session=1";

/// Build a test `ServerConfig` pointing at `inventory_file`.
pub fn test_config(inventory_file: &Path, file_writes_enabled: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        inventory_file: inventory_file.to_path_buf(),
        file_writes_enabled,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../static")),
    }
}

/// A router backed by an inventory file in a private temp directory.
///
/// The directory lives as long as this value does.
pub struct TestSite {
    _dir: TempDir,
    pub path: PathBuf,
    pub app: Router,
}

impl TestSite {
    /// Current contents of the inventory file, or `Null` if it does not exist.
    pub fn file_json(&self) -> Value {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap(),
            Err(_) => Value::Null,
        }
    }

    /// Raw bytes of the inventory file.
    pub fn file_bytes(&self) -> Vec<u8> {
        std::fs::read(&self.path).unwrap_or_default()
    }

    /// Ids in file order.
    pub fn file_ids(&self) -> Vec<String> {
        self.file_json()
            .as_array()
            .map(|a| {
                a.iter()
                    .map(|v| v["id"].as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Build the full application router over a fresh inventory file seeded with
/// `vehicles`.
///
/// Uses the same `build_app_router` as `main.rs` so integration tests
/// exercise the production middleware stack.
pub fn build_test_site(vehicles: Vec<Value>, file_writes_enabled: bool) -> TestSite {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vehicles.json");
    std::fs::write(&path, serde_json::to_string_pretty(&vehicles).unwrap()).unwrap();

    let config = test_config(&path, file_writes_enabled);
    let state = AppState::from_config(config.clone());
    let app = build_app_router(state, &config);

    TestSite {
        _dir: dir,
        path,
        app,
    }
}

/// A complete stored vehicle record.
pub fn vehicle(id: &str, make: &str, model: &str, body_type: &str) -> Value {
    json!({
        "id": id,
        "make": make,
        "model": model,
        "year": 2020,
        "trim": "",
        "price": 21000,
        "mileage": 30000,
        "fuelType": "Gasoline",
        "transmission": "Automatic",
        "exteriorColor": "White",
        "bodyType": body_type,
        "condition": "used",
        "title": format!("2020 {make} {model}"),
        "image": "/static/images/placeholder-car.svg",
        "featured": false,
        "createdAt": "2026-01-15T12:00:00Z"
    })
}

/// Fields for a valid `POST /api/vehicles` body.
pub fn new_vehicle_body() -> Value {
    json!({
        "make": "Honda",
        "model": "Civic",
        "year": 2019,
        "trim": "EX",
        "price": 18500,
        "mileage": 42000,
        "fuelType": "Gasoline",
        "transmission": "CVT",
        "exteriorColor": "Blue",
        "bodyType": "Sedan"
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an urlencoded form, optionally with a cookie.
pub async fn post_form(app: Router, uri: &str, form: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(form.to_string())).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `Location` header of a redirect.
pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("Missing Location header")
        .to_str()
        .unwrap()
}
