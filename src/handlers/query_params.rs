//! Optional, defaulted and required query parameters.

use crate::core::error::ApiError;
use crate::models::item::{ItemName, ItemQueryResponse, NeedyItem};
use crate::validation::params::{ItemDetailParams, NeedyParams, PageParams, SearchParams};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    routing::get,
    Json, Router,
};

const FAKE_ITEMS: [&str; 3] = ["Foo", "Bar", "Baz"];

const LONG_DESCRIPTION: &str = "This is an amazing item that had a long description";

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/items2/", get(list_items_handler))
        .route("/items3/{item_id}", get(read_item_handler))
        .route("/items4/{item_id}", get(read_item_detail_handler))
        .route("/items/{item_id}", get(read_user_item_handler))
}

/// GET /items2/?skip=0&limit=10
pub async fn list_items_handler(
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<ItemName>>, ApiError> {
    let Query(params) = params?;
    let items = params
        .apply(&FAKE_ITEMS)
        .iter()
        .map(|name| ItemName {
            item_name: name.to_string(),
        })
        .collect();

    Ok(Json(items))
}

/// GET /items3/{item_id}?q=
pub async fn read_item_handler(
    item_id: Result<Path<String>, PathRejection>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ItemQueryResponse>, ApiError> {
    let Path(item_id) = item_id?;
    let Query(params) = params?;

    Ok(Json(ItemQueryResponse {
        item_id,
        q: params.q().map(str::to_string),
        description: None,
    }))
}

/// GET /items4/{item_id}?q=&short=
pub async fn read_item_detail_handler(
    item_id: Result<Path<String>, PathRejection>,
    params: Result<Query<ItemDetailParams>, QueryRejection>,
) -> Result<Json<ItemQueryResponse>, ApiError> {
    let Path(item_id) = item_id?;
    let Query(params) = params?;

    Ok(Json(ItemQueryResponse {
        item_id,
        q: params.q.filter(|q| !q.is_empty()),
        description: (!params.short).then(|| LONG_DESCRIPTION.to_string()),
    }))
}

/// GET /items/{item_id}?needy=
pub async fn read_user_item_handler(
    item_id: Result<Path<String>, PathRejection>,
    params: Result<Query<NeedyParams>, QueryRejection>,
) -> Result<Json<NeedyItem>, ApiError> {
    let Path(item_id) = item_id?;
    let Query(NeedyParams { needy }) = params?;
    Ok(Json(NeedyItem { item_id, needy }))
}
