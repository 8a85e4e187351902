use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing credentials {location}")]
    MissingCredentials { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Permission denied: '{capability}' required {location}")]
    PermissionDenied {
        capability: String,
        location: ErrorLocation,
    },

    #[error("Invalid or expired token for '{action}': {message} {location}")]
    InvalidNonce {
        action: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingCredentials { .. } => "MISSING_CREDENTIALS",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::PermissionDenied { .. } => "FORBIDDEN",
            Self::InvalidNonce { .. } => "INVALID_NONCE",
        }
    }

    /// True when the failure means "who are you" rather than "you may not"
    pub fn is_authentication_failure(&self) -> bool {
        !matches!(
            self,
            Self::PermissionDenied { .. } | Self::InvalidNonce { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
