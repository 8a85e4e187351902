//! Browser admin surface: HTML pages plus form and link actions.
//!
//! Actions never render errors inline; they redirect back to the page they
//! came from with `status=error&code=...`.

pub mod actions;
pub mod admin_actor;
pub mod error;
pub mod notices;
pub mod pages;
pub mod views;

pub const MIGRATION_PAGE_PATH: &str = "/admin/migration";
pub const HISTORY_PAGE_PATH: &str = "/admin/migration/exports";
pub const DOWNLOAD_PATH: &str = crate::app_state::DOWNLOAD_ACTION_PATH;
pub const DELETE_PATH: &str = "/admin/actions/delete";
pub const DELETE_ALL_PATH: &str = "/admin/actions/delete-all";
pub const BULK_DOWNLOAD_PATH: &str = "/admin/actions/bulk-download";
