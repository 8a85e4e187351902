pub mod actor;
pub mod capability;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod nonce_action;
pub mod nonce_store;

pub use actor::Actor;
pub use capability::Capability;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use nonce_action::NonceAction;
pub use nonce_store::{
    DEFAULT_MAX_NONCES, DEFAULT_NONCE_TTL_SECS, IssuedNonce, NONCE_TOKEN_LENGTH, NonceStore,
};
