mod api;

use crate::AppState;

use sm_auth::{Actor, Claims, JwtValidator, NonceStore};
use sm_export::{ExportService, ExportSettings};

use std::path::Path;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// State over a lazy pool; nothing here touches the database
pub(crate) fn lazy_state(exports_dir: &Path, with_auth: bool) -> AppState {
    let pool = SqlitePool::connect_lazy("sqlite::memory:").expect("lazy pool");
    let settings = ExportSettings {
        exports_dir: exports_dir.to_path_buf(),
        exports_url: "https://site.test/exports".to_string(),
        dir_mode: 0o755,
        site_url: "https://site.test".to_string(),
        platform_version: "6.4".to_string(),
        uploads_url: None,
        generator_version: "test".to_string(),
    };

    AppState {
        exports: ExportService::new(pool.clone(), settings),
        pool,
        nonces: NonceStore::default(),
        jwt_validator: with_auth.then(|| Arc::new(JwtValidator::with_hs256(SECRET))),
        local_actor: Actor::local_admin("1", "Local Admin"),
        public_url: "https://admin.test".to_string(),
    }
}

pub(crate) fn token_for(sub: &str, roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        name: Some(format!("User {sub}")),
        exp: now + 3600,
        iat: now,
        roles: roles.iter().map(|r| r.to_string()).collect(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}
