use crate::Result as DbErrorResult;

use sqlx::{Row, SqlitePool};

/// Option holding the active theme's stylesheet identifier
pub const STYLESHEET_OPTION: &str = "stylesheet";

/// Option holding the content schema version
pub const DB_VERSION_OPTION: &str = "db_version";

/// Option holding the public home URL
pub const HOME_OPTION: &str = "home";

/// Name of the option storing a theme's customizations
pub fn theme_mods_option(stylesheet: &str) -> String {
    format!("theme_mods_{stylesheet}")
}

pub struct OptionRepository {
    pool: SqlitePool,
}

impl OptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Raw stored value, `None` when the option is not set
    pub async fn find_value(&self, name: &str) -> DbErrorResult<Option<String>> {
        let value = sqlx::query_scalar(
            r#"
                SELECT option_value
                FROM options
                WHERE option_name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Stored `(name, value)` pairs for the options that exist among `names`,
    /// in the order of `names`
    pub async fn find_values(&self, names: &[&str]) -> DbErrorResult<Vec<(String, String)>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; names.len()].join(", ");
        let sql = format!(
            r#"
                SELECT option_name, option_value
                FROM options
                WHERE option_name IN ({placeholders})
            "#
        );

        let mut query = sqlx::query(&sql);
        for name in names {
            query = query.bind(*name);
        }

        let rows = query.fetch_all(&self.pool).await?;

        let mut found = Vec::with_capacity(rows.len());
        for row in &rows {
            let name: String = row.try_get("option_name")?;
            let value: String = row.try_get("option_value")?;
            found.push((name, value));
        }

        found.sort_by_key(|(name, _)| names.iter().position(|n| *n == name.as_str()));
        Ok(found)
    }
}
