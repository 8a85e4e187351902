use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED, DEFAULT_LOCAL_USER_ID,
    DEFAULT_LOCAL_USER_NAME, MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// HS256 shared secret
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config dir
    pub jwt_public_key_path: Option<String>,
    /// Identity used for every request while auth is disabled
    pub local_user_id: String,
    pub local_user_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            jwt_secret: None,
            jwt_public_key_path: None,
            local_user_id: String::from(DEFAULT_LOCAL_USER_ID),
            local_user_name: String::from(DEFAULT_LOCAL_USER_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.local_user_id.trim().is_empty() {
            return Err(ConfigError::auth("auth.local_user_id cannot be empty"));
        }

        if !self.enabled {
            return Ok(());
        }

        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (None, None) => Err(ConfigError::auth(
                "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
            )),
            (Some(secret), _) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            (Some(_), _) => Ok(()),
            (None, Some(key_path)) => {
                let path = Path::new(key_path);
                if path.is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path must be relative to the config dir",
                    ));
                }
                if key_path.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.jwt_public_key_path cannot contain '..'",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path does not exist: {}",
                        full_path.display()
                    )));
                }
                Ok(())
            }
        }
    }
}
