use crate::Result as DbErrorResult;

use sm_core::UserRecord;

use std::collections::BTreeMap;

use sqlx::{Row, SqlitePool};

/// Upper bound on users carried by one export
pub const EXPORT_USER_LIMIT: i64 = 50;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// First `limit` users ordered by login, without roles or meta
    pub async fn find_first(&self, limit: i64) -> DbErrorResult<Vec<UserRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT ID, user_login, user_email, display_name
                FROM users
                ORDER BY user_login
                LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<UserRecord> {
                Ok(UserRecord {
                    id: row.try_get("ID")?,
                    user_login: row.try_get("user_login")?,
                    user_email: row.try_get("user_email")?,
                    display_name: row.try_get("display_name")?,
                    roles: Vec::new(),
                    meta: BTreeMap::new(),
                })
            })
            .collect()
    }

    /// Role names of a user, sorted
    pub async fn find_roles(&self, user_id: i64) -> DbErrorResult<Vec<String>> {
        let roles = sqlx::query_scalar(
            r#"
                SELECT role
                FROM user_roles
                WHERE user_id = ?
                ORDER BY role
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(roles)
    }

    /// All meta of a user grouped by key. Values keep insertion order and a
    /// NULL value is exported as an empty string.
    pub async fn find_meta(&self, user_id: i64) -> DbErrorResult<BTreeMap<String, Vec<String>>> {
        let rows = sqlx::query(
            r#"
                SELECT meta_key, meta_value
                FROM usermeta
                WHERE user_id = ? AND meta_key IS NOT NULL
                ORDER BY umeta_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut meta: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in &rows {
            let key: String = row.try_get("meta_key")?;
            let value: Option<String> = row.try_get("meta_value")?;
            meta.entry(key).or_default().push(value.unwrap_or_default());
        }

        Ok(meta)
    }
}
