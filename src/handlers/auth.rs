use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::token::{LoginForm, TokenEcho, TokenResponse};
use crate::models::user::UserRecord;
use crate::security::context::{BearerToken, CurrentUser};
use axum::{
    extract::{rejection::FormRejection, State},
    Extension, Form, Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Exchange form credentials for a bearer token
///
/// POST /token
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Form(form) = form?;

    if state.config.auth.strict_grant_type && form.grant_type.as_deref() != Some("password") {
        warn!(
            username = %form.username,
            grant_type = ?form.grant_type,
            "Login rejected: grant_type must be 'password'"
        );
        return Err(ApiError::Validation(
            "grant_type must be 'password'".to_string(),
        ));
    }

    debug!(
        username = %form.username,
        scopes = ?form.scopes(),
        client_id = ?form.client_id,
        has_client_secret = form.client_secret.is_some(),
        "Login attempt"
    );

    let token = state.authenticator.login(&form.username, &form.password)?;

    Ok(Json(token))
}

/// Current active user
///
/// GET /users/me
pub async fn read_users_me_handler(
    Extension(current_user): Extension<CurrentUser>,
) -> Json<UserRecord> {
    Json(current_user.into_inner())
}

/// Echo the presented bearer token
///
/// GET /items/
pub async fn read_items_handler(Extension(token): Extension<BearerToken>) -> Json<TokenEcho> {
    Json(TokenEcho {
        token: token.as_str().to_string(),
    })
}
