use crate::{
    ApiError, AppState, AuthorizedActor, CreateExportRequest, CreateExportResponse,
    ExportContentResponse, NonceResponse, api::error::Result as ApiResult,
};

use sm_auth::NonceAction;
use sm_core::{ExportFileInfo, ExportType};

use std::str::FromStr;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use log::info;

/// Header carrying the `create_export` token on API requests
pub const NONCE_HEADER: &str = "X-Migration-Nonce";

/// Issue a single-use token (GET /api/migration/v1/nonce/{action})
pub async fn issue_nonce(
    State(state): State<AppState>,
    AuthorizedActor(actor): AuthorizedActor,
    Path(action): Path<String>,
) -> ApiResult<Json<NonceResponse>> {
    let action = NonceAction::from_str(&action)
        .map_err(|_| ApiError::validation(format!("Unknown action '{action}'"), "action"))?;

    let nonce = state.nonces.issue(action, &actor.id);
    Ok(Json(NonceResponse::from(nonce)))
}

/// Create and persist an export (POST /api/migration/v1/export/persistent)
///
/// The token is checked before the body is parsed, so a forged request
/// never reaches parameter validation.
pub async fn create_export(
    State(state): State<AppState>,
    AuthorizedActor(actor): AuthorizedActor,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<CreateExportResponse>)> {
    let token = headers.get(NONCE_HEADER).and_then(|v| v.to_str().ok());
    state
        .nonces
        .consume(NonceAction::CreateExport, &actor.id, token)?;

    let request = parse_create_request(&body)?;
    let export_type = match request.export_type.as_deref() {
        Some(value) => ExportType::from_str(value)
            .map_err(|_| ApiError::validation(format!("Invalid export type '{value}'"), "type"))?,
        None => ExportType::default(),
    };

    let outcome = state
        .exports
        .create_export(export_type, Some(actor.display_name.clone()))
        .await?;

    info!(
        "Export {} ({}) created via API by {}",
        outcome.file_name, export_type, actor.id
    );

    let download_url = state.download_url(&actor, outcome.file_name.as_str());
    Ok((
        StatusCode::CREATED,
        Json(CreateExportResponse {
            success: true,
            outcome,
            download_url,
        }),
    ))
}

/// List stored exports, newest first (GET /api/migration/v1/exports/list)
pub async fn list_exports(
    State(state): State<AppState>,
    AuthorizedActor(_actor): AuthorizedActor,
) -> ApiResult<Json<Vec<ExportFileInfo>>> {
    let files = state.exports.list().await?;
    Ok(Json(files))
}

/// Full contents of one export (GET /api/migration/v1/export/{filename})
pub async fn get_export(
    State(state): State<AppState>,
    AuthorizedActor(actor): AuthorizedActor,
    Path(filename): Path<String>,
) -> ApiResult<Json<ExportContentResponse>> {
    let stored = state.exports.read(&filename).await?;
    let download_url = state.download_url(&actor, stored.file_name.as_str());

    Ok(Json(ExportContentResponse {
        filename: stored.file_name.to_string(),
        data: stored.data,
        file_size: stored.file_size,
        download_url,
    }))
}

fn parse_create_request(body: &[u8]) -> ApiResult<CreateExportRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateExportRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Invalid request body: {e}"), "body"))
}
