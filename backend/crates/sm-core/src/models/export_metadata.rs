use crate::ExportType;

use serde::{Deserialize, Serialize};

/// Format version written into every document
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Run metadata embedded in every export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// RFC3339 timestamp of the run (UTC, second precision)
    pub generated_at: String,

    pub site_url: String,

    /// Version of the publishing platform the data came from
    pub platform_version: String,

    /// Version of the service that produced the file
    pub generator_version: String,

    pub export_type: ExportType,

    pub export_version: String,

    /// Display name of the user who requested the export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_by: Option<String>,
}
