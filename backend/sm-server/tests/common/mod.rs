#![allow(dead_code)]

//! Test infrastructure for sm-server router tests

use sm_auth::{Actor, Claims, JwtValidator, NonceAction, NonceStore};
use sm_export::{ExportService, ExportSettings};
use sm_server::AppState;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const PUBLIC_URL: &str = "https://admin.test";
pub const LOCAL_ADMIN_ID: &str = "1";

/// Router state plus the temp directory that backs it
pub struct TestApp {
    pub state: AppState,
    pub exports_dir: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> Router {
        sm_server::build_router(self.state.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }

    pub fn issue(&self, action: NonceAction, actor_id: &str) -> String {
        self.state.nonces.issue(action, actor_id).token
    }

    /// `*.json` names currently in the export directory, sorted
    pub fn export_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.exports_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.ends_with(".json"))
            .collect();
        names.sort();
        names
    }

    /// Every entry in the export directory, hidden files included
    pub fn all_entries(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.exports_dir) else {
            return Vec::new();
        };
        entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect()
    }

    pub fn write_export(&self, name: &str, contents: &str) {
        std::fs::create_dir_all(&self.exports_dir).unwrap();
        std::fs::write(self.exports_dir.join(name), contents).unwrap();
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn test_settings(dir: &Path) -> ExportSettings {
    ExportSettings {
        exports_dir: dir.to_path_buf(),
        exports_url: "https://site.test/exports".to_string(),
        dir_mode: 0o755,
        site_url: "https://site.test".to_string(),
        platform_version: "6.4".to_string(),
        uploads_url: None,
        generator_version: "0.1.0".to_string(),
    }
}

/// Auth disabled: every request is the local admin
pub async fn create_test_app() -> TestApp {
    build_app(false).await
}

/// HS256 auth enabled with [`SECRET`]
pub async fn create_test_app_with_auth() -> TestApp {
    build_app(true).await
}

async fn build_app(with_auth: bool) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let exports_dir = dir.path().join("migration-exports");
    let pool = create_test_pool().await;

    let state = AppState {
        exports: ExportService::new(pool.clone(), test_settings(&exports_dir)),
        pool,
        nonces: NonceStore::default(),
        jwt_validator: with_auth.then(|| Arc::new(JwtValidator::with_hs256(SECRET))),
        local_actor: Actor::local_admin(LOCAL_ADMIN_ID, "Local Admin"),
        public_url: PUBLIC_URL.to_string(),
    };

    TestApp {
        state,
        exports_dir,
        _dir: dir,
    }
}

pub fn create_token(sub: &str, name: &str, roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        name: Some(name.to_string()),
        exp: now + 3600,
        iat: now,
        roles: roles.iter().map(|r| r.to_string()).collect(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .expect("Failed to encode token")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn insert_option(pool: &SqlitePool, name: &str, value: &str) {
    sqlx::query("INSERT INTO options (option_name, option_value) VALUES (?, ?)")
        .bind(name)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert option");
}

/// Minimal well-formed export document
pub fn sample_document(export_type: &str) -> String {
    serde_json::json!({
        "metadata": {
            "export_version": "1.0",
            "export_type": export_type,
            "site_url": "https://site.test",
            "platform_version": "6.4",
            "generated_at": "2026-03-14T09:30:15Z",
            "generator_version": "0.1.0",
            "exported_by": "Local Admin"
        }
    })
    .to_string()
}
