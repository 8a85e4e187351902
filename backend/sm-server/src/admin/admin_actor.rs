use crate::{AppState, admin::error::AdminError, session};

use sm_auth::{Actor, Capability};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Browser counterpart of `AuthorizedActor`; rejections render HTML pages
pub struct AdminActor(pub Actor);

impl FromRequestParts<AppState> for AdminActor {
    type Rejection = AdminError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let actor = session::resolve_actor(&parts.headers, state)?;
            actor.require(Capability::ManageOptions)?;
            Ok(AdminActor(actor))
        }
    }
}
