use crate::admin::views;

use sm_auth::AuthError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// Why a browser request was turned away before reaching a page or action
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Not signed in: {source} {location}")]
    Unauthenticated {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Access denied: {source} {location}")]
    Forbidden {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl From<AuthError> for AdminError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if source.is_authentication_failure() {
            Self::Unauthenticated { source, location }
        } else {
            Self::Forbidden { source, location }
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        log::warn!("{}", self);

        let (status, page) = match self {
            AdminError::Unauthenticated { .. } => (
                StatusCode::UNAUTHORIZED,
                views::error_page(
                    "Sign in required",
                    "Your session is missing or has expired. Sign in again to manage migration exports.",
                ),
            ),
            AdminError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                views::error_page(
                    "Access denied",
                    "You do not have sufficient permissions to manage migration exports.",
                ),
            ),
        };

        (status, Html(page)).into_response()
    }
}
