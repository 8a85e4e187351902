use crate::{ConfigError, ConfigErrorResult, DEFAULT_PLATFORM_VERSION, DEFAULT_SITE_URL};

use serde::Deserialize;

/// Facts about the host site recorded in export metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Used when the content database has no `home` option
    pub url: String,
    pub platform_version: String,
    /// Base URL of uploaded media, used to build featured image URLs
    pub uploads_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SITE_URL),
            platform_version: String::from(DEFAULT_PLATFORM_VERSION),
            uploads_url: None,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !crate::config::is_http_url(&self.url) {
            return Err(ConfigError::site(format!(
                "site.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }
        if self.platform_version.trim().is_empty() {
            return Err(ConfigError::site("site.platform_version cannot be empty"));
        }
        if let Some(url) = &self.uploads_url
            && !crate::config::is_http_url(url)
        {
            return Err(ConfigError::site(format!(
                "site.uploads_url must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }
}
