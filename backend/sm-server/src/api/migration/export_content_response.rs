use serde::Serialize;
use serde_json::Value;

/// Full contents of one export file
#[derive(Debug, Serialize)]
pub struct ExportContentResponse {
    pub filename: String,
    pub data: Value,
    pub file_size: u64,
    pub download_url: String,
}
