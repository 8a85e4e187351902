use crate::TermRef;

use serde::{Deserialize, Serialize};

/// A post, page or custom content row as it appears in an export.
///
/// Field names follow the host platform's column names so exported files stay
/// readable by tooling that already knows that schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    pub post_title: String,
    pub post_content: String,
    pub post_excerpt: String,
    pub post_status: String,
    pub post_type: String,
    pub post_name: String,
    pub post_author: i64,
    pub post_date: String,
    pub post_date_gmt: String,
    pub menu_order: i64,
    pub comment_status: String,
    pub ping_status: String,
    pub guid: String,

    /// Category and tag slugs
    #[serde(default)]
    pub terms: Vec<TermRef>,

    /// Resolved URL of the post thumbnail, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
}
