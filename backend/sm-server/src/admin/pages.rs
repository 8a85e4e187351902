use crate::AppState;
use crate::admin::admin_actor::AdminActor;
use crate::admin::notices::StatusQuery;
use crate::admin::views::{self, HistoryPageView, HistoryRow, MigrationPageView, Notice};

use sm_auth::NonceAction;
use sm_export::DirectoryUsage;

use axum::{
    extract::{Query, State},
    response::Html,
};

/// GET /admin/migration
pub async fn migration_page(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Query(query): Query<StatusQuery>,
) -> Html<String> {
    let create = state.nonces.issue(NonceAction::CreateExport, &actor.id);
    let exports_dir = state.exports.exports_dir().display().to_string();
    let notices = query.notices(&state.public_url);

    Html(views::migration_page(&MigrationPageView {
        actor: &actor,
        notices: &notices,
        create_token: &create.token,
        exports_dir: &exports_dir,
    }))
}

/// GET /admin/migration/exports
///
/// A directory that cannot be read still renders, with an error notice and
/// an empty table.
pub async fn history_page(
    State(state): State<AppState>,
    AdminActor(actor): AdminActor,
    Query(query): Query<StatusQuery>,
) -> Html<String> {
    let mut notices = query.notices(&state.public_url);

    let files = match state.exports.list().await {
        Ok(files) => files,
        Err(e) => {
            log::error!("Failed to list exports: {}", e);
            notices.push(Notice::error("Export files could not be listed."));
            Vec::new()
        }
    };

    let usage = state.exports.usage().await.unwrap_or_else(|e| {
        log::error!("Failed to measure export directory: {}", e);
        DirectoryUsage {
            exists: false,
            total_bytes: 0,
            file_count: 0,
        }
    });

    let rows: Vec<HistoryRow> = files
        .into_iter()
        .map(|file| HistoryRow {
            download_url: state.download_url(&actor, &file.file_name),
            delete_token: state
                .nonces
                .issue(NonceAction::DeleteExport, &actor.id)
                .token,
            file_name: file.file_name,
            file_path: file.file_path,
            created_at: file.created_at,
            file_size: file.file_size,
        })
        .collect();

    let delete_all = state.nonces.issue(NonceAction::DeleteAllExports, &actor.id);
    let bulk = state
        .nonces
        .issue(NonceAction::BulkDownloadExports, &actor.id);
    let exports_dir = state.exports.exports_dir().display().to_string();

    Html(views::history_page(&HistoryPageView {
        actor: &actor,
        notices: &notices,
        rows: &rows,
        exports_dir: &exports_dir,
        usage,
        delete_all_token: &delete_all.token,
        bulk_download_token: &bulk.token,
    }))
}
