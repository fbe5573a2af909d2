//! Item HTTP Handlers
//!
//! 每个 handler 对应一个 (路径形状, 方法) 组合

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateItem, DeleteItem, GetItem, ListItems, ReplaceItem};
use crate::infrastructure::http::dto::{ItemRequest, ItemResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ItemIdPath;
use crate::infrastructure::http::state::AppState;

/// GET /items
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.list_items_handler.handle(ListItems).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// POST /items
///
/// 请求体里的 id 会被忽略，解码失败时不消耗 ID
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let request = ItemRequest::decode(&body)?;

    let item = state
        .create_item_handler
        .handle(CreateItem {
            draft: request.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /items/:id
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemIdPath(item_id): ItemIdPath,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.get_item_handler.handle(GetItem { item_id }).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /items/:id
///
/// 整体替换；条目不存在时 404 优先于请求体错误的 400
pub async fn replace_item(
    State(state): State<Arc<AppState>>,
    ItemIdPath(item_id): ItemIdPath,
    body: Bytes,
) -> Result<Json<ItemResponse>, ApiError> {
    let request = match ItemRequest::decode(&body) {
        Ok(request) => request,
        Err(e) => {
            state.get_item_handler.handle(GetItem { item_id }).await?;
            return Err(e);
        }
    };

    let item = state
        .replace_item_handler
        .handle(ReplaceItem {
            item_id,
            draft: request.into(),
        })
        .await?;

    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemIdPath(item_id): ItemIdPath,
) -> Result<StatusCode, ApiError> {
    state
        .delete_item_handler
        .handle(DeleteItem { item_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// /items 上不支持的方法
pub async fn collection_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// /items/:id 上不支持的方法
///
/// 先解析 ID，非整数 ID 仍然是 400
pub async fn item_method_not_allowed(ItemIdPath(_): ItemIdPath) -> ApiError {
    ApiError::MethodNotAllowed
}

/// 未匹配任何路由
///
/// `/items/` 之后剩下的部分不是单个路径段时，按 ID 解析失败处理
pub async fn unmatched(uri: Uri) -> ApiError {
    if uri.path().starts_with("/items/") {
        ApiError::invalid_id()
    } else {
        ApiError::NotFound("404 page not found".to_string())
    }
}
