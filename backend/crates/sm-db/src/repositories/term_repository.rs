use crate::Result as DbErrorResult;

use sqlx::SqlitePool;

/// Taxonomies whose terms are attached to exported posts
pub const EXPORTED_TAXONOMIES: [&str; 2] = ["category", "post_tag"];

pub struct TermRepository {
    pool: SqlitePool,
}

impl TermRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Slugs of the terms attached to an object within the given taxonomies,
    /// ordered by slug. Duplicates across taxonomies are collapsed.
    pub async fn find_slugs_for_object(
        &self,
        object_id: i64,
        taxonomies: &[&str],
    ) -> DbErrorResult<Vec<String>> {
        if taxonomies.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; taxonomies.len()].join(", ");
        let sql = format!(
            r#"
                SELECT DISTINCT t.slug
                FROM terms t
                INNER JOIN term_taxonomy tt ON tt.term_id = t.term_id
                INNER JOIN term_relationships tr ON tr.term_taxonomy_id = tt.term_taxonomy_id
                WHERE tr.object_id = ? AND tt.taxonomy IN ({placeholders})
                ORDER BY t.slug
            "#
        );

        let mut query = sqlx::query_scalar::<_, String>(&sql).bind(object_id);
        for taxonomy in taxonomies {
            query = query.bind(*taxonomy);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }
}
