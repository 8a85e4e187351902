use serde::{Deserialize, Serialize};

/// Attachment row (metadata only, never the binary)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    pub post_title: String,
    pub guid: String,
    pub post_mime_type: String,
    pub post_content: String,
    pub post_parent: i64,
}
