use crate::Result as ExportErrorResult;

use sm_core::{ConfigurationExport, ESSENTIAL_OPTIONS};
use sm_db::OptionRepository;
use sm_db::repositories::option_repository::{
    DB_VERSION_OPTION, STYLESHEET_OPTION, theme_mods_option,
};

use std::collections::BTreeMap;

use serde_json::Value;
use sqlx::SqlitePool;

/// Gathers the `configuration` section: allow-listed options and the
/// active theme's customizations. Read-only.
pub struct ConfigurationCollector {
    options: OptionRepository,
    platform_version: String,
}

impl ConfigurationCollector {
    pub fn new(pool: SqlitePool, platform_version: impl Into<String>) -> Self {
        Self {
            options: OptionRepository::new(pool),
            platform_version: platform_version.into(),
        }
    }

    pub async fn collect(&self) -> ExportErrorResult<ConfigurationExport> {
        let options: BTreeMap<String, Value> = self
            .options
            .find_values(&ESSENTIAL_OPTIONS)
            .await?
            .into_iter()
            .map(|(name, raw)| (name, decode_option_value(raw)))
            .collect();

        let themes = self.collect_themes().await?;
        let database_version = self.options.find_value(DB_VERSION_OPTION).await?;

        Ok(ConfigurationExport {
            options,
            themes,
            database_version,
            platform_version: self.platform_version.clone(),
        })
    }

    async fn collect_themes(&self) -> ExportErrorResult<BTreeMap<String, Value>> {
        let mut themes = BTreeMap::new();

        let stylesheet = self
            .options
            .find_value(STYLESHEET_OPTION)
            .await?
            .filter(|s| !s.trim().is_empty());
        let Some(stylesheet) = stylesheet else {
            return Ok(themes);
        };

        let mods = self
            .options
            .find_value(&theme_mods_option(&stylesheet))
            .await?
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
            .filter(Value::is_object);

        if let Some(mods) = mods {
            themes.insert(stylesheet, mods);
        }

        Ok(themes)
    }
}

/// Stored values stay strings unless they hold a JSON object or array
pub fn decode_option_value(raw: String) -> Value {
    let trimmed = raw.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && let Ok(value @ (Value::Object(_) | Value::Array(_))) = serde_json::from_str(&raw)
    {
        return value;
    }
    Value::String(raw)
}
