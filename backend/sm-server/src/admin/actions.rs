//! Form and link targets of the admin pages.
//!
//! Each action checks its single-use token before looking at any other
//! parameter, then performs exactly one side effect. Form posts must also
//! come from a page under the public URL.

use crate::AppState;
use crate::admin::admin_actor::AdminActor;
use crate::admin::notices::{
    CODE_INVALID_REQUEST, STATUS_DELETED, STATUS_DELETED_ALL, STATUS_EXPORT_CREATED,
    redirect_error, redirect_with,
};
use crate::admin::{HISTORY_PAGE_PATH, MIGRATION_PAGE_PATH};

use sm_auth::{Actor, NonceAction};
use sm_core::ExportType;

use std::str::FromStr;

use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use log::{info, warn};
use serde::Deserialize;
use url::Url;

const CONFIRM_VALUE: &str = "yes";

#[derive(Debug, Deserialize)]
pub struct CreateExportForm {
    pub export_type: Option<String>,
    #[serde(rename = "_token")]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileActionParams {
    pub file: Option<String>,
    #[serde(rename = "_token")]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAllForm {
    pub confirm: Option<String>,
    #[serde(rename = "_token")]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenParams {
    #[serde(rename = "_token")]
    pub token: Option<String>,
}

/// POST /admin/migration
pub async fn create_export(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    headers: HeaderMap,
    Form(form): Form<CreateExportForm>,
) -> Response {
    if !from_public_origin(&state, &headers, &actor)
        || !check_token(&state, NonceAction::CreateExport, &actor, form.token.as_deref())
    {
        return redirect_error(MIGRATION_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    let export_type = match form.export_type.as_deref() {
        Some(value) => match ExportType::from_str(value) {
            Ok(export_type) => export_type,
            Err(e) => {
                warn!("Rejected export request from {}: {}", actor.id, e);
                return redirect_error(MIGRATION_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
            }
        },
        None => ExportType::default(),
    };

    match state
        .exports
        .create_export(export_type, Some(actor.display_name.clone()))
        .await
    {
        Ok(outcome) => {
            info!(
                "Export {} ({}) created by {}",
                outcome.file_name, export_type, actor.id
            );
            let download_url = state.download_url(&actor, outcome.file_name.as_str());
            redirect_with(
                MIGRATION_PAGE_PATH,
                &[
                    ("status", STATUS_EXPORT_CREATED),
                    ("download_url", download_url.as_str()),
                ],
            )
            .into_response()
        }
        Err(e) => {
            log::error!("Export creation failed: {}", e);
            redirect_error(MIGRATION_PAGE_PATH, e.code()).into_response()
        }
    }
}

/// GET /admin/actions/download?file=&_token=
pub async fn download_export(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Query(params): Query<FileActionParams>,
) -> Response {
    if !check_token(&state, NonceAction::DownloadExport, &actor, params.token.as_deref()) {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    let Some(file) = params.file else {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    };

    match state.exports.open(&file).await {
        Ok(download) => {
            info!("Export {} downloaded by {}", download.file_name, actor.id);
            attachment(
                "application/json",
                download.file_name.as_str(),
                download.bytes,
            )
        }
        Err(e) => {
            warn!("Download of {:?} failed: {}", file, e);
            redirect_error(HISTORY_PAGE_PATH, e.code()).into_response()
        }
    }
}

/// POST /admin/actions/delete
pub async fn delete_export(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    headers: HeaderMap,
    Form(form): Form<FileActionParams>,
) -> Response {
    if !from_public_origin(&state, &headers, &actor)
        || !check_token(&state, NonceAction::DeleteExport, &actor, form.token.as_deref())
    {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    let Some(file) = form.file else {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    };

    match state.exports.delete(&file).await {
        Ok(()) => {
            info!("Export {} deleted by {}", file, actor.id);
            redirect_with(HISTORY_PAGE_PATH, &[("status", STATUS_DELETED)]).into_response()
        }
        Err(e) => {
            warn!("Delete of {:?} failed: {}", file, e);
            redirect_error(HISTORY_PAGE_PATH, e.code()).into_response()
        }
    }
}

/// POST /admin/actions/delete-all
pub async fn delete_all_exports(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    headers: HeaderMap,
    Form(form): Form<DeleteAllForm>,
) -> Response {
    if !from_public_origin(&state, &headers, &actor)
        || !check_token(&state, NonceAction::DeleteAllExports, &actor, form.token.as_deref())
    {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    if form.confirm.as_deref() != Some(CONFIRM_VALUE) {
        warn!("Delete-all by {} without confirmation", actor.id);
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    match state.exports.delete_all().await {
        Ok(count) => {
            info!("{} deleted all exports ({} files)", actor.id, count);
            let count = count.to_string();
            redirect_with(
                HISTORY_PAGE_PATH,
                &[("status", STATUS_DELETED_ALL), ("count", count.as_str())],
            )
            .into_response()
        }
        Err(e) => {
            log::error!("Delete-all failed: {}", e);
            redirect_error(HISTORY_PAGE_PATH, e.code()).into_response()
        }
    }
}

/// GET /admin/actions/bulk-download?_token=
pub async fn bulk_download(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Query(params): Query<TokenParams>,
) -> Response {
    if !check_token(
        &state,
        NonceAction::BulkDownloadExports,
        &actor,
        params.token.as_deref(),
    ) {
        return redirect_error(HISTORY_PAGE_PATH, CODE_INVALID_REQUEST).into_response();
    }

    match state.exports.build_archive().await {
        Ok(archive) => {
            info!(
                "Archive {} ({} files) downloaded by {}",
                archive.file_name, archive.file_count, actor.id
            );
            attachment("application/zip", &archive.file_name, archive.bytes)
        }
        Err(e) => {
            warn!("Bulk download failed: {}", e);
            redirect_error(HISTORY_PAGE_PATH, e.code()).into_response()
        }
    }
}

/// `Origin`, else `Referer`, must match the public URL's origin. Requests
/// carrying neither come from non-browser clients and pass.
fn from_public_origin(state: &AppState, headers: &HeaderMap, actor: &Actor) -> bool {
    let Some(source) = headers
        .get(header::ORIGIN)
        .or_else(|| headers.get(header::REFERER))
    else {
        return true;
    };

    let request_origin = source
        .to_str()
        .ok()
        .and_then(|value| Url::parse(value).ok())
        .map(|url| url.origin())
        .filter(|origin| origin.is_tuple())
        .map(|origin| origin.ascii_serialization());

    match (request_origin, state.public_origin()) {
        (Some(request), Some(public)) if request == public => true,
        (request, _) => {
            warn!(
                "Rejected cross-origin form post by {} from {:?}",
                actor.id,
                request.as_deref().unwrap_or("<unparseable>")
            );
            false
        }
    }
}

fn check_token(state: &AppState, action: NonceAction, actor: &Actor, token: Option<&str>) -> bool {
    match state.nonces.consume(action, &actor.id, token) {
        Ok(()) => true,
        Err(e) => {
            warn!("Rejected {} by {}: {}", action, actor.id, e);
            false
        }
    }
}

/// `file_name` is a validated export or archive name, safe inside the header
fn attachment(content_type: &'static str, file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        bytes,
    )
        .into_response()
}
