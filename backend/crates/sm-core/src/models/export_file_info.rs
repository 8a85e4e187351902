use crate::ExportType;

use serde::{Deserialize, Serialize};

/// One entry of the export history listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFileInfo {
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_size: u64,
    /// From the document metadata, else from the file name, else unknown
    pub created_at: Option<String>,
    /// From the document metadata; unknown when the file cannot be parsed
    pub export_type: Option<ExportType>,
}
