//! Who is making the request.
//!
//! Both surfaces share one rule: an `Authorization: Bearer` header wins,
//! otherwise the `migration_session` cookie carries the same JWT. With
//! authentication disabled every request is the configured local admin.

use crate::AppState;

use sm_auth::{Actor, AuthError, Result as AuthErrorResult};

use std::panic::Location;

use axum::http::{HeaderMap, header};
use error_location::ErrorLocation;

pub const SESSION_COOKIE: &str = "migration_session";

const BEARER_PREFIX: &str = "Bearer ";

#[track_caller]
pub fn resolve_actor(headers: &HeaderMap, state: &AppState) -> AuthErrorResult<Actor> {
    let Some(validator) = state.jwt_validator.as_ref() else {
        return Ok(state.local_actor.clone());
    };

    let caller = Location::caller();
    let token = match bearer_token(headers)? {
        Some(token) => token,
        None => session_cookie(headers).ok_or_else(|| AuthError::MissingCredentials {
            location: ErrorLocation::from(caller),
        })?,
    };

    let claims = validator.validate(token)?;
    Ok(Actor::from_claims(claims))
}

#[track_caller]
fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<Option<&str>> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidToken {
        message: "Authorization header is not valid ASCII".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim())),
        Some(_) => Err(AuthError::MissingCredentials {
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Value of the session cookie, scanning every `Cookie` header
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value)
}
