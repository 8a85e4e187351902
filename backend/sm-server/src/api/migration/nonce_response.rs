use sm_auth::{IssuedNonce, NonceAction};

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NonceResponse {
    pub action: NonceAction,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedNonce> for NonceResponse {
    fn from(nonce: IssuedNonce) -> Self {
        Self {
            action: nonce.action,
            token: nonce.token,
            expires_at: nonce.expires_at,
        }
    }
}
