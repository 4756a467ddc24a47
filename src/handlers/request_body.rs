//! JSON request bodies, alone and combined with path and query parameters.

use crate::core::error::ApiError;
use crate::models::item::{Item, PricedItem, UpdatedItem};
use crate::validation::params::SearchParams;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    routing::{post, put},
    Json, Router,
};

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/items1/", post(create_item_handler))
        .route("/items2/", post(create_priced_item_handler))
        .route("/items/{item_id}", put(update_item_handler))
}

/// POST /items1/
pub async fn create_item_handler(
    item: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(item) = item?;
    Ok(Json(item))
}

/// POST /items2/
pub async fn create_priced_item_handler(
    item: Result<Json<Item>, JsonRejection>,
) -> Result<Json<PricedItem>, ApiError> {
    let Json(item) = item?;
    let price_with_tax = item.price_with_tax();

    Ok(Json(PricedItem {
        item,
        price_with_tax,
    }))
}

/// PUT /items/{item_id}?q=
pub async fn update_item_handler(
    item_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<SearchParams>, QueryRejection>,
    item: Result<Json<Item>, JsonRejection>,
) -> Result<Json<UpdatedItem>, ApiError> {
    let Path(item_id) = item_id?;
    let Query(params) = params?;
    let Json(item) = item?;

    Ok(Json(UpdatedItem {
        item_id,
        item,
        q: params.q().map(str::to_string),
    }))
}
