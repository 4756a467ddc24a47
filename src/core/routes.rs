// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{auth, fallback, health, path_params, query_params, request_body};
use crate::security::middleware::{require_active_user, require_bearer};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Bearer token + resolved, active user
    let protected = Router::new()
        .route("/users/me", get(auth::read_users_me_handler))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_active_user,
        ));

    // Bearer token only
    let token_only = Router::new()
        .route("/items/", get(auth::read_items_handler))
        .route_layer(middleware::from_fn(require_bearer));

    Router::new()
        // Public endpoints
        .route("/token", post(auth::login_handler))
        .route("/health", get(health::health_handler))

        .merge(protected)
        .merge(token_only)

        // Parameter demos
        .nest("/path-params", path_params::router())
        .nest("/query-params", query_params::router())
        .nest("/request-body", request_body::router())

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
