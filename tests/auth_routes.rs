use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use tutorial_api::core::config::Config;
use tutorial_api::core::routes::build_router;
use tutorial_api::core::startup::load_user_store;
use tutorial_api::core::state::AppState;
use tutorial_api::models::user::UserRecord;
use tutorial_api::security::hasher::PasswordHasher;
use tutorial_api::security::token_codec::TokenCodec;
use tutorial_api::stores::user_store::UserStore;

fn test_config() -> Config {
    Config::from_file(&PathBuf::from("config.toml")).expect("Failed to load config")
}

fn app() -> Router {
    let config = test_config();
    let store = load_user_store(&config).expect("Failed to load users");
    build_router(Arc::new(AppState::new(config, store)))
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: Router, form: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/token")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get(app: Router, uri: &str, authorization: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }

    app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_login_issues_username_token() {
    let response = login(app(), "username=johndoe&password=secret1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"access_token": "johndoe", "token_type": "bearer"})
    );
}

#[tokio::test]
async fn test_login_ignores_optional_fields() {
    let response = login(
        app(),
        "grant_type=password&username=alice&password=secret2&scope=me+items&client_id=x&client_secret=y",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["access_token"], "alice");
}

#[tokio::test]
async fn test_login_failures_share_detail() {
    for form in [
        "username=johndoe&password=wrong",
        "username=nobody&password=secret1",
    ] {
        let response = login(app(), form).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"detail": "Incorrect username or password"})
        );
    }
}

#[tokio::test]
async fn test_login_missing_field_is_unprocessable() {
    let response = login(app(), "username=johndoe").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_users_me_active_user() {
    let response = get(app(), "/users/me", Some("Bearer johndoe")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "username": "johndoe",
            "full_name": "John Doe",
            "email": "johndoe@example.com",
            "disabled": false
        })
    );
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_users_me_disabled_user() {
    let response = get(app(), "/users/me", Some("Bearer alice")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"detail": "Inactive user"}));
}

#[tokio::test]
async fn test_users_me_unknown_token() {
    let response = get(app(), "/users/me", Some("Bearer mallory")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Invalid authentication credentials"})
    );
}

#[tokio::test]
async fn test_users_me_without_token() {
    for authorization in [None, Some("Basic am9obmRvZTpzZWNyZXQx"), Some("Bearer")] {
        let response = get(app(), "/users/me", authorization).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert_eq!(body_json(response).await, json!({"detail": "Not authenticated"}));
    }
}

#[tokio::test]
async fn test_items_echoes_any_token() {
    let response = get(app(), "/items/", Some("Bearer whatever-you-like")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"token": "whatever-you-like"}));

    let response = get(app(), "/items/", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = get(app(), "/nope", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn test_demo_routes_are_mounted() {
    let response = get(app(), "/path-params/users/me", None).await;
    assert_eq!(body_json(response).await, json!({"user_id": "the current user"}));

    let response = get(app(), "/query-params/items2/?limit=1", None).await;
    assert_eq!(body_json(response).await, json!([{"item_name": "Foo"}]));
}

#[tokio::test]
async fn test_strict_grant_type_enforced() {
    let mut config = test_config();
    config.auth.strict_grant_type = true;
    let store = load_user_store(&config).unwrap();
    let app = build_router(Arc::new(AppState::new(config, store)));

    let response = login(app.clone(), "username=johndoe&password=secret1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = login(app, "grant_type=password&username=johndoe&password=secret1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

struct UpperHasher;

impl PasswordHasher for UpperHasher {
    fn hash(&self, password: &str) -> String {
        password.to_uppercase()
    }
}

struct PrefixedToken;

impl TokenCodec for PrefixedToken {
    fn issue(&self, user: &UserRecord) -> String {
        format!("tok-{}", user.username)
    }

    fn decode(&self, token: &str) -> Option<String> {
        token.strip_prefix("tok-").map(str::to_string)
    }
}

#[tokio::test]
async fn test_swapped_hasher_and_codec() {
    let store = UserStore::from_toml_str(
        r#"
        [[users]]
        username = "dana"
        full_name = "Dana"
        hashed_password = "HUNTER2"
        "#,
    )
    .unwrap();
    let state = AppState::with_components(
        test_config(),
        store,
        Arc::new(UpperHasher),
        Arc::new(PrefixedToken),
    );
    let app = build_router(Arc::new(state));

    let response = login(app.clone(), "username=dana&password=hunter2").await;
    assert_eq!(body_json(response).await["access_token"], "tok-dana");

    let response = get(app.clone(), "/users/me", Some("Bearer tok-dana")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "dana");

    let response = get(app, "/users/me", Some("Bearer dana")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bad_path_segments_use_detail_envelope() {
    for uri in [
        "/path-params/users/%FF",
        "/path-params/files/a/%FF",
        "/query-params/items3/%FF",
        "/query-params/items4/%FF",
        "/query-params/items/%FF?needy=x",
        "/path-params/items1/%FF",
    ] {
        let response = get(app(), uri, None).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json",
            "{uri}"
        );
        assert!(body_json(response).await["detail"].is_string(), "{uri}");
    }
}
