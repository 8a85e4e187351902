use crate::{ExportFileName, ExportType};

use serde::Serialize;

/// Identity of a freshly persisted export file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportOutcome {
    pub file_name: ExportFileName,
    pub file_path: String,
    pub file_url: String,
    pub file_size: u64,
    pub created_at: String,
    pub export_type: ExportType,
}
