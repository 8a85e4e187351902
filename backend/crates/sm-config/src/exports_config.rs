use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXPORTS_DIR_MODE, DEFAULT_EXPORTS_DIRECTORY,
    DEFAULT_NONCE_TTL_SECS, MAX_EXPORTS_DIR_MODE, MAX_NONCE_TTL_SECS, MIN_NONCE_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportsConfig {
    /// Export directory; relative paths resolve against the config dir
    pub dir: String,
    /// Base URL under which the export directory is published
    pub public_url: Option<String>,
    /// Permission bits applied when the export directory is created (unix)
    pub dir_mode: u32,
    /// Lifetime of issued anti-forgery tokens
    pub nonce_ttl_secs: u64,
}

impl Default for ExportsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_EXPORTS_DIRECTORY),
            public_url: None,
            dir_mode: DEFAULT_EXPORTS_DIR_MODE,
            nonce_ttl_secs: DEFAULT_NONCE_TTL_SECS,
        }
    }
}

impl ExportsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.dir.trim().is_empty() {
            return Err(ConfigError::exports("exports.dir cannot be empty"));
        }
        if self.dir.contains("..") {
            return Err(ConfigError::exports("exports.dir cannot contain '..'"));
        }

        if self.dir_mode > MAX_EXPORTS_DIR_MODE {
            return Err(ConfigError::exports(format!(
                "exports.dir_mode must be at most 0o777, got {:#o}",
                self.dir_mode
            )));
        }

        if !(MIN_NONCE_TTL_SECS..=MAX_NONCE_TTL_SECS).contains(&self.nonce_ttl_secs) {
            return Err(ConfigError::exports(format!(
                "exports.nonce_ttl_secs must be {}-{}, got {}",
                MIN_NONCE_TTL_SECS, MAX_NONCE_TTL_SECS, self.nonce_ttl_secs
            )));
        }

        if let Some(url) = &self.public_url
            && !crate::config::is_http_url(url)
        {
            return Err(ConfigError::exports(format!(
                "exports.public_url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }
}
