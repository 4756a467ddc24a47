//! Typed path parameters.

use crate::core::error::ApiError;
use crate::models::item::{FilePath, ItemId, ModelName, ModelResponse, UserId};
use axum::{
    extract::{rejection::PathRejection, Path},
    routing::get,
    Json, Router,
};

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/items1/{item_id}", get(read_item_handler))
        // Static segments take priority over captures, so `/users/me` never
        // reaches `read_user_handler`.
        .route("/users/me", get(read_user_me_handler))
        .route("/users/{user_id}", get(read_user_handler))
        .route("/model/{model_name}", get(get_model_handler))
        .route("/files/{*file_path}", get(read_file_handler))
}

/// GET /items1/{item_id}
pub async fn read_item_handler(
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ItemId>, ApiError> {
    let Path(item_id) = item_id?;
    Ok(Json(ItemId { item_id }))
}

/// GET /users/me
pub async fn read_user_me_handler() -> Json<UserId> {
    Json(UserId {
        user_id: "the current user".to_string(),
    })
}

/// GET /users/{user_id}
pub async fn read_user_handler(
    user_id: Result<Path<String>, PathRejection>,
) -> Result<Json<UserId>, ApiError> {
    let Path(user_id) = user_id?;
    Ok(Json(UserId { user_id }))
}

/// GET /model/{model_name}
pub async fn get_model_handler(
    model_name: Result<Path<ModelName>, PathRejection>,
) -> Result<Json<ModelResponse>, ApiError> {
    let Path(model_name) = model_name?;

    Ok(Json(ModelResponse {
        model_name,
        message: model_name.message().to_string(),
    }))
}

/// GET /files/{*file_path}
pub async fn read_file_handler(
    file_path: Result<Path<String>, PathRejection>,
) -> Result<Json<FilePath>, ApiError> {
    let Path(file_path) = file_path?;
    Ok(Json(FilePath { file_path }))
}
