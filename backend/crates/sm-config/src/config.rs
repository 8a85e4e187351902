use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, ExportsConfig, LoggingConfig, ServerConfig, SiteConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Path segment under the public URL where export files are published
const EXPORTS_URL_SEGMENT: &str = "exports";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub exports: ExportsConfig,
    pub site: SiteConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. `SM_CONFIG_DIR` env var, else `./.site-migration/`
    /// 2. Create the config directory if missing
    /// 3. Read `config.toml` if present, else defaults
    /// 4. Apply `SM_*` environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Config directory: `SM_CONFIG_DIR` > `./.site-migration/`
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate everything; call after load() so bad config fails at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.auth.validate(&config_dir)?;
        self.exports.validate()?;
        self.site.validate()?;

        let db_path = Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }
        if let Some(file) = &self.logging.file
            && (file.contains('/') || file.contains('\\') || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name",
            ));
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Export directory; absolute paths are used as-is
    pub fn exports_path(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.exports.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    pub fn log_dir_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    /// PEM contents of the RS256 public key, if one is configured
    pub fn jwt_public_key_pem(&self) -> ConfigErrorResult<Option<String>> {
        let Some(key_path) = &self.auth.jwt_public_key_path else {
            return Ok(None);
        };
        let path = Self::config_dir()?.join(key_path);
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ConfigError::Io { path, source: e })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Externally visible base URL without a trailing slash
    pub fn public_url(&self) -> String {
        match &self.server.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}:{}", self.server.host, self.server.port),
        }
    }

    /// Base URL of the export directory without a trailing slash
    pub fn exports_url(&self) -> String {
        match &self.exports.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/{}", self.public_url(), EXPORTS_URL_SEGMENT),
        }
    }

    /// Log the effective configuration. Secrets are never logged.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (public url {})",
            self.server.host,
            self.server.port,
            self.public_url()
        );
        info!("  database: {}", self.database.path);

        let auth_type = if self.auth.jwt_secret.is_some() {
            "HS256"
        } else if self.auth.jwt_public_key_path.is_some() {
            "RS256"
        } else {
            "none"
        };

        if self.auth.enabled {
            info!("  auth: enabled ({})", auth_type);
        } else {
            info!(
                "  auth: disabled (local user '{}')",
                self.auth.local_user_id
            );
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  exports: dir={}, mode={:#o}, nonce_ttl={}s",
            self.exports.dir, self.exports.dir_mode, self.exports.nonce_ttl_secs
        );

        info!(
            "  site: {} (platform {})",
            self.site.url, self.site.platform_version
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("SM_SERVER_PUBLIC_URL", &mut self.server.public_url);

        // Database
        Self::apply_env_string("SM_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("SM_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("SM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string(
            "SM_AUTH_JWT_PUBLIC_KEY_PATH",
            &mut self.auth.jwt_public_key_path,
        );
        Self::apply_env_string("SM_AUTH_LOCAL_USER_ID", &mut self.auth.local_user_id);
        Self::apply_env_string("SM_AUTH_LOCAL_USER_NAME", &mut self.auth.local_user_name);

        // Logging
        Self::apply_env_parse("SM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SM_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("SM_LOG_DIR", &mut self.logging.dir);

        // Exports
        Self::apply_env_string("SM_EXPORTS_DIR", &mut self.exports.dir);
        Self::apply_env_option_string("SM_EXPORTS_PUBLIC_URL", &mut self.exports.public_url);
        Self::apply_env_mode("SM_EXPORTS_DIR_MODE", &mut self.exports.dir_mode);
        Self::apply_env_parse("SM_NONCE_TTL_SECS", &mut self.exports.nonce_ttl_secs);

        // Site
        Self::apply_env_string("SM_SITE_URL", &mut self.site.url);
        Self::apply_env_string("SM_SITE_PLATFORM_VERSION", &mut self.site.platform_version);
        Self::apply_env_option_string("SM_SITE_UPLOADS_URL", &mut self.site.uploads_url);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Octal permission bits, with or without a `0o` prefix
    fn apply_env_mode(var_name: &str, target: &mut u32) {
        if let Ok(val) = std::env::var(var_name) {
            let digits = val.trim().trim_start_matches("0o");
            if let Ok(mode) = u32::from_str_radix(digits, 8) {
                *target = mode;
            }
        }
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
