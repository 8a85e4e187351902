use crate::Result as DbErrorResult;

use sm_core::MediaRecord;

use sqlx::{Row, SqlitePool};

pub struct MediaRepository {
    pool: SqlitePool,
}

impl MediaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every attachment, ordered by ID
    pub async fn find_all(&self) -> DbErrorResult<Vec<MediaRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT ID, post_title, guid, post_mime_type, post_content, post_parent
                FROM posts
                WHERE post_type = 'attachment'
                ORDER BY ID
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<MediaRecord> {
                Ok(MediaRecord {
                    id: row.try_get("ID")?,
                    post_title: row.try_get("post_title")?,
                    guid: row.try_get("guid")?,
                    post_mime_type: row.try_get("post_mime_type")?,
                    post_content: row.try_get("post_content")?,
                    post_parent: row.try_get("post_parent")?,
                })
            })
            .collect()
    }
}
