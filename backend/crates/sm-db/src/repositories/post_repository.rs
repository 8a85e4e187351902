//! Post repository: read access to posts, pages and post meta.
//!
//! Only rows that belong in a content export are returned by
//! [`PostRepository::find_exportable`]: revisions and navigation menu items
//! are skipped, and so are attachments (their status is `inherit`).

use crate::Result as DbErrorResult;

use sm_core::PostRecord;

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

/// Statuses carried into an export
pub const EXPORTED_STATUSES: [&str; 4] = ["publish", "draft", "trash", "auto-draft"];

/// Post types never exported as content
pub const EXCLUDED_TYPES: [&str; 2] = ["revision", "nav_menu_item"];

/// Post meta key holding the attachment ID of a post thumbnail
pub const THUMBNAIL_META_KEY: &str = "_thumbnail_id";

/// Post meta key holding an attachment's path relative to the uploads directory
pub const ATTACHED_FILE_META_KEY: &str = "_wp_attached_file";

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All exportable posts ordered by ID, without derived fields
    pub async fn find_exportable(&self) -> DbErrorResult<Vec<PostRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT ID, post_title, post_content, post_excerpt, post_status,
                    post_type, post_name, post_author, post_date, post_date_gmt,
                    menu_order, comment_status, ping_status, guid
                FROM posts
                WHERE post_status IN (?, ?, ?, ?)
                  AND post_type NOT IN (?, ?)
                ORDER BY ID
            "#,
        )
        .bind(EXPORTED_STATUSES[0])
        .bind(EXPORTED_STATUSES[1])
        .bind(EXPORTED_STATUSES[2])
        .bind(EXPORTED_STATUSES[3])
        .bind(EXCLUDED_TYPES[0])
        .bind(EXCLUDED_TYPES[1])
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// First stored value of a post meta key
    pub async fn find_meta_value(&self, post_id: i64, meta_key: &str) -> DbErrorResult<Option<String>> {
        let value: Option<Option<String>> = sqlx::query_scalar(
            r#"
                SELECT meta_value
                FROM postmeta
                WHERE post_id = ? AND meta_key = ?
                ORDER BY meta_id
                LIMIT 1
            "#,
        )
        .bind(post_id)
        .bind(meta_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value.flatten())
    }

    /// GUID of an attachment, `None` when the ID is not an attachment
    pub async fn find_attachment_guid(&self, attachment_id: i64) -> DbErrorResult<Option<String>> {
        let guid: Option<String> = sqlx::query_scalar(
            r#"
                SELECT guid
                FROM posts
                WHERE ID = ? AND post_type = 'attachment'
            "#,
        )
        .bind(attachment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(guid)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<PostRecord> {
        Ok(PostRecord {
            id: row.try_get("ID")?,
            post_title: row.try_get("post_title")?,
            post_content: row.try_get("post_content")?,
            post_excerpt: row.try_get("post_excerpt")?,
            post_status: row.try_get("post_status")?,
            post_type: row.try_get("post_type")?,
            post_name: row.try_get("post_name")?,
            post_author: row.try_get("post_author")?,
            post_date: row.try_get("post_date")?,
            post_date_gmt: row.try_get("post_date_gmt")?,
            menu_order: row.try_get("menu_order")?,
            comment_status: row.try_get("comment_status")?,
            ping_status: row.try_get("ping_status")?,
            guid: row.try_get("guid")?,
            terms: Vec::new(),
            featured_image: None,
        })
    }
}
