use sm_core::ExportOutcome;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateExportResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: ExportOutcome,
    /// Browser download link with a single-use token
    pub download_url: String,
}
