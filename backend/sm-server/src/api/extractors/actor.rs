//! Axum extractors for REST API authentication

use crate::{ApiError, AppState, session};

use sm_auth::{Actor, Capability};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// An authenticated actor holding `manage_options`
///
/// Rejects with 401 when no valid identity is present and 403 when the
/// actor lacks the capability, before any handler code runs.
pub struct AuthorizedActor(pub Actor);

impl FromRequestParts<AppState> for AuthorizedActor {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let actor = session::resolve_actor(&parts.headers, state)?;
            actor.require(Capability::ManageOptions)?;

            log::debug!("API request by {} ({})", actor.display_name, actor.id);
            Ok(AuthorizedActor(actor))
        }
    }
}
