mod auth_config;
mod config;
mod database_config;
mod error;
mod exports_config;
mod log_level;
mod logging_config;
mod server_config;
mod site_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use exports_config::ExportsConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use site_config::SiteConfig;

pub const CONFIG_DIR_ENV: &str = "SM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".site-migration";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "site.db";

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_LOCAL_USER_ID: &str = "1";
const DEFAULT_LOCAL_USER_NAME: &str = "Local Admin";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_EXPORTS_DIRECTORY: &str = "migration-exports";
const DEFAULT_EXPORTS_DIR_MODE: u32 = 0o755;
const MAX_EXPORTS_DIR_MODE: u32 = 0o777;
const DEFAULT_NONCE_TTL_SECS: u64 = 12 * 60 * 60;
const MIN_NONCE_TTL_SECS: u64 = 60;
const MAX_NONCE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

const DEFAULT_SITE_URL: &str = "http://localhost";
const DEFAULT_PLATFORM_VERSION: &str = "6.4";

#[cfg(test)]
mod tests;
