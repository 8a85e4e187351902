use serde::Deserialize;

/// Body of `POST /export/persistent`; an empty body means a full export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateExportRequest {
    /// Parsed by the handler so an unknown value reports `VALIDATION_ERROR`
    #[serde(rename = "type")]
    pub export_type: Option<String>,
}
