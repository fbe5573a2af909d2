//! HTTP Routes
//!
//! API Endpoints:
//! - /ping          GET     健康检查
//! - /items         GET     列出所有条目
//! - /items         POST    创建条目（201）
//! - /items/:id     GET     获取条目
//! - /items/:id     PUT     整体替换条目
//! - /items/:id     DELETE  删除条目（204）
//!
//! 两种路径形状上的其他方法（包括 HEAD）都返回 405。
//! `/items/` 下不是单个整数段的路径（`/items/`、`/items/1/x`）返回 400 "Invalid ID"

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(item_routes())
        .fallback(handlers::unmatched)
}

/// Item 路由
fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/items",
            get(handlers::list_items)
                .post(handlers::create_item)
                // get() 默认也响应 HEAD
                .head(handlers::collection_method_not_allowed)
                .fallback(handlers::collection_method_not_allowed),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::replace_item)
                .delete(handlers::delete_item)
                .head(handlers::item_method_not_allowed)
                .fallback(handlers::item_method_not_allowed),
        )
}
