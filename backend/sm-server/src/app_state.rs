use crate::error::Result as ServerErrorResult;

use sm_auth::{Actor, JwtValidator, NonceAction, NonceStore};
use sm_config::Config;
use sm_export::{ExportService, ExportSettings};

use std::sync::Arc;

use log::{info, warn};
use sqlx::SqlitePool;
use url::{Url, form_urlencoded};

/// Path of the browser download action, relative to the public URL
pub const DOWNLOAD_ACTION_PATH: &str = "/admin/actions/download";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub exports: ExportService,
    pub nonces: NonceStore,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Actor used for every request when authentication is disabled
    pub local_actor: Actor,
    /// Externally visible base URL without a trailing slash
    pub public_url: String,
}

impl AppState {
    /// Wire the state from validated configuration and an open, migrated pool
    pub fn from_config(config: &Config, pool: SqlitePool) -> ServerErrorResult<Self> {
        let jwt_validator = build_validator(config)?;

        let settings = ExportSettings {
            exports_dir: config.exports_path()?,
            exports_url: config.exports_url(),
            dir_mode: config.exports.dir_mode,
            site_url: config.site.url.clone(),
            platform_version: config.site.platform_version.clone(),
            uploads_url: config.site.uploads_url.clone(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        info!("Export directory: {}", settings.exports_dir.display());

        Ok(Self {
            exports: ExportService::new(pool.clone(), settings),
            pool,
            nonces: NonceStore::new(config.exports.nonce_ttl_secs),
            jwt_validator,
            local_actor: Actor::local_admin(
                config.auth.local_user_id.clone(),
                config.auth.local_user_name.clone(),
            ),
            public_url: config.public_url(),
        })
    }

    /// `scheme://host[:port]` of `public_url`, the only origin trusted for
    /// cross-origin API reads and admin form posts
    pub fn public_origin(&self) -> Option<String> {
        let origin = Url::parse(&self.public_url).ok()?.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }

    /// Browser download link for `file_name` carrying a fresh single-use token
    pub fn download_url(&self, actor: &Actor, file_name: &str) -> String {
        let nonce = self.nonces.issue(NonceAction::DownloadExport, &actor.id);
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("file", file_name)
            .append_pair("_token", &nonce.token)
            .finish();

        format!("{}{}?{}", self.public_url, DOWNLOAD_ACTION_PATH, query)
    }
}

fn build_validator(config: &Config) -> ServerErrorResult<Option<Arc<JwtValidator>>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - every request acts as the local administrator");
        return Ok(None);
    }

    let validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(pem) = config.jwt_public_key_pem()? {
        info!("JWT: RS256 authentication enabled");
        JwtValidator::with_rs256(&pem)?
    } else {
        return Err(sm_config::ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    Ok(Some(Arc::new(validator)))
}
