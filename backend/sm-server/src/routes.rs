use crate::admin::{self, actions, pages};
use crate::{AppState, api::migration::migration, health};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use log::warn;
use tower_http::cors::{Any, CorsLayer};

/// Prefix of the programmatic API
pub const API_PREFIX: &str = "/api/migration/v1";

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state);
    let api = Router::new()
        .route("/nonce/{action}", get(migration::issue_nonce))
        .route("/export/persistent", post(migration::create_export))
        .route("/exports/list", get(migration::list_exports))
        .route("/export/{filename}", get(migration::get_export))
        .layer(cors);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest(API_PREFIX, api)
        // Admin pages and actions
        .route(
            admin::MIGRATION_PAGE_PATH,
            get(pages::migration_page).post(actions::create_export),
        )
        .route(admin::HISTORY_PAGE_PATH, get(pages::history_page))
        .route(admin::DOWNLOAD_PATH, get(actions::download_export))
        .route(admin::DELETE_PATH, post(actions::delete_export))
        .route(admin::DELETE_ALL_PATH, post(actions::delete_all_exports))
        .route(admin::BULK_DOWNLOAD_PATH, get(actions::bulk_download))
        .with_state(state)
}

/// Browsers may only read API responses from pages served under `public_url`;
/// any other origin gets no `Access-Control-Allow-Origin` and cannot read tokens
fn cors_layer(state: &AppState) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match state
        .public_origin()
        .and_then(|origin| HeaderValue::from_str(&origin).ok())
    {
        Some(origin) => layer.allow_origin(origin),
        None => {
            warn!(
                "Public URL {} has no usable origin; cross-origin API access disabled",
                state.public_url
            );
            layer
        }
    }
}
