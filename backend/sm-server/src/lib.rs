pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::actor::AuthorizedActor,
    migration::{
        create_export_request::CreateExportRequest,
        create_export_response::CreateExportResponse,
        export_content_response::ExportContentResponse,
        migration::{NONCE_HEADER, create_export, get_export, issue_nonce, list_exports},
        nonce_response::NonceResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::{API_PREFIX, build_router};
