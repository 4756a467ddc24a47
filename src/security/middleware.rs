use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::security::bearer::extract_bearer;
use crate::security::context::{BearerToken, CurrentUser};
use crate::security::gate::authorize;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Token extraction only: stores the raw token as [`BearerToken`]
pub async fn require_bearer(mut req: Request, next: Next) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?.to_string();

    req.extensions_mut().insert(BearerToken::new(token));

    Ok(next.run(req).await)
}

/// Full gate: extract, resolve, reject disabled users, then expose
/// [`CurrentUser`] to the handler
pub async fn require_active_user(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?;
    let resolved = state.resolver.resolve(token);

    let user = authorize(resolved.as_deref()).inspect_err(|e| {
        debug!(error = %e, path = %req.uri().path(), "Request rejected by auth gate");
    })?;

    req.extensions_mut().insert(CurrentUser::new(user));

    Ok(next.run(req).await)
}
