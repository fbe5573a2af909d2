//! Typed extractors

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::ItemId;
use crate::infrastructure::http::error::ApiError;

/// `/items/:id` 中的 ID 段
///
/// 非整数时拒绝为 400 "Invalid ID"
#[derive(Debug, Clone, Copy)]
pub struct ItemIdPath(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Missing item id segment");
                ApiError::invalid_id()
            })?;

        raw.parse::<ItemId>().map(ItemIdPath).map_err(|_| {
            tracing::debug!(raw = %raw, "Non-numeric item id");
            ApiError::invalid_id()
        })
    }
}
