//! Item Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateItem, DeleteItem, ReplaceItem};
use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::domain::Item;

// ============================================================================
// CreateItem
// ============================================================================

/// CreateItem Handler
pub struct CreateItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl CreateItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: CreateItem) -> Result<Item, ApplicationError> {
        let item = self.item_repo.create(command.draft)?;

        tracing::info!(
            item_id = %item.id,
            first_name = %item.first_name,
            last_name = %item.last_name,
            "Item created"
        );

        Ok(item)
    }
}

// ============================================================================
// ReplaceItem
// ============================================================================

/// ReplaceItem Handler
///
/// 整体替换，不支持部分更新；ID 始终取命令中的 item_id
pub struct ReplaceItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl ReplaceItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: ReplaceItem) -> Result<Item, ApplicationError> {
        let item = self.item_repo.replace(command.item_id, command.draft)?;

        tracing::info!(item_id = %item.id, "Item replaced");

        Ok(item)
    }
}

// ============================================================================
// DeleteItem
// ============================================================================

/// DeleteItem Handler
pub struct DeleteItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl DeleteItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, command: DeleteItem) -> Result<(), ApplicationError> {
        self.item_repo.delete(command.item_id)?;

        tracing::info!(item_id = %command.item_id, "Item deleted");

        Ok(())
    }
}
