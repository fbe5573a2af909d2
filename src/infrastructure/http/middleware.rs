//! HTTP Middleware
//!
//! 请求错误日志：带上命中的路由模板与 item id

use std::collections::HashMap;

use axum::{
    extract::{MatchedPath, Path, Request},
    middleware::Next,
    response::Response,
};

/// 错误响应日志中间件
///
/// 4xx 记 warn，5xx 记 error。命中 `/items/:id` 时额外记录 `item_id`
/// 原始段（即使它不是合法整数），未命中任何路由时 `route` 为空。
/// 响应本身原样返回。
pub async fn error_logging_middleware(
    matched_path: Option<MatchedPath>,
    params: Option<Path<HashMap<String, String>>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = matched_path.map(|m| m.as_str().to_owned());
    let item_id = params.and_then(|Path(mut p)| p.remove("id"));

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            %method,
            %uri,
            route = route.as_deref(),
            item_id = item_id.as_deref(),
            status = status.as_u16(),
            "Item request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            %method,
            %uri,
            route = route.as_deref(),
            item_id = item_id.as_deref(),
            status = status.as_u16(),
            "Item request rejected"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    use crate::infrastructure::http::error::ApiError;
    use crate::infrastructure::http::extract::ItemIdPath;

    async fn missing_item(ItemIdPath(_): ItemIdPath) -> ApiError {
        ApiError::NotFound("Item not found".to_string())
    }

    async fn broken() -> ApiError {
        ApiError::Internal("store unavailable".to_string())
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/items", get(|| async { "[]" }))
            .route("/items/:id", get(missing_item))
            .route("/broken", get(broken))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router()
            .oneshot(request)
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(status_of("/items").await, StatusCode::OK);
        assert_eq!(status_of("/items/7").await, StatusCode::NOT_FOUND);
        assert_eq!(status_of("/items/abc").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/broken").await, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_of("/missing").await, StatusCode::NOT_FOUND);
    }
}
