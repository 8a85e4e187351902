#![allow(dead_code)]

use sm_export::{ExportService, ExportSettings};

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// In-memory content database with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sm_db::migrate(&pool).await.expect("Failed to run migrations");

    pool
}

pub fn test_settings(dir: &Path) -> ExportSettings {
    ExportSettings {
        exports_dir: dir.to_path_buf(),
        exports_url: "https://site.test/exports".to_string(),
        dir_mode: 0o755,
        site_url: "https://fallback.test".to_string(),
        platform_version: "6.4.3".to_string(),
        uploads_url: Some("https://site.test/uploads".to_string()),
        generator_version: "0.1.0".to_string(),
    }
}

pub fn test_service(pool: SqlitePool, dir: &Path) -> ExportService {
    ExportService::new(pool, test_settings(dir))
}

pub async fn insert_post(pool: &SqlitePool, title: &str, post_type: &str, status: &str) -> i64 {
    sqlx::query(
        "INSERT INTO posts (post_title, post_name, post_type, post_status, guid) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(title)
    .bind(title.to_lowercase().replace(' ', "-"))
    .bind(post_type)
    .bind(status)
    .bind(format!("https://site.test/?p={title}"))
    .execute(pool)
    .await
    .expect("Failed to insert post")
    .last_insert_rowid()
}

pub async fn insert_attachment(pool: &SqlitePool, guid: &str) -> i64 {
    sqlx::query(
        "INSERT INTO posts (post_title, post_type, post_status, post_mime_type, guid) VALUES ('Image', 'attachment', 'inherit', 'image/png', ?)",
    )
    .bind(guid)
    .execute(pool)
    .await
    .expect("Failed to insert attachment")
    .last_insert_rowid()
}

pub async fn insert_post_meta(pool: &SqlitePool, post_id: i64, key: &str, value: &str) {
    sqlx::query("INSERT INTO postmeta (post_id, meta_key, meta_value) VALUES (?, ?, ?)")
        .bind(post_id)
        .bind(key)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert post meta");
}

pub async fn attach_term(pool: &SqlitePool, object_id: i64, taxonomy: &str, slug: &str) {
    let term_id = sqlx::query("INSERT INTO terms (name, slug) VALUES (?, ?)")
        .bind(slug)
        .bind(slug)
        .execute(pool)
        .await
        .expect("Failed to insert term")
        .last_insert_rowid();
    let tt_id = sqlx::query("INSERT INTO term_taxonomy (term_id, taxonomy) VALUES (?, ?)")
        .bind(term_id)
        .bind(taxonomy)
        .execute(pool)
        .await
        .expect("Failed to insert term taxonomy")
        .last_insert_rowid();
    sqlx::query("INSERT INTO term_relationships (object_id, term_taxonomy_id) VALUES (?, ?)")
        .bind(object_id)
        .bind(tt_id)
        .execute(pool)
        .await
        .expect("Failed to insert term relationship");
}

pub async fn insert_user(pool: &SqlitePool, login: &str, role: &str) -> i64 {
    let id = sqlx::query("INSERT INTO users (user_login, user_email, display_name) VALUES (?, ?, ?)")
        .bind(login)
        .bind(format!("{login}@example.test"))
        .bind(login)
        .execute(pool)
        .await
        .expect("Failed to insert user")
        .last_insert_rowid();
    sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
        .bind(id)
        .bind(role)
        .execute(pool)
        .await
        .expect("Failed to insert role");
    id
}

pub async fn insert_option(pool: &SqlitePool, name: &str, value: &str) {
    sqlx::query("INSERT INTO options (option_name, option_value) VALUES (?, ?)")
        .bind(name)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert option");
}
