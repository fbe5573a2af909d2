//! Item Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ItemRepositoryPort;
use crate::application::queries::{GetItem, ListItems};
use crate::domain::Item;

/// GetItem Handler
pub struct GetItemHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl GetItemHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, query: GetItem) -> Result<Item, ApplicationError> {
        Ok(self.item_repo.get(query.item_id)?)
    }
}

/// ListItems Handler
pub struct ListItemsHandler {
    item_repo: Arc<dyn ItemRepositoryPort>,
}

impl ListItemsHandler {
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { item_repo }
    }

    pub async fn handle(&self, _query: ListItems) -> Result<Vec<Item>, ApplicationError> {
        let items = self.item_repo.list()?;
        tracing::debug!(count = items.len(), "Items listed");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemDraft, ItemId};
    use crate::infrastructure::memory::InMemoryItemStore;

    #[tokio::test]
    async fn test_get_round_trip() {
        let repo: Arc<dyn ItemRepositoryPort> = Arc::new(InMemoryItemStore::new());
        let draft = ItemDraft::new("A", "B", 30);
        let created = repo.create(draft.clone()).unwrap();

        let item = GetItemHandler::new(repo)
            .handle(GetItem { item_id: created.id })
            .await
            .unwrap();

        assert_eq!(item.id, created.id);
        assert_eq!(item.draft(), draft);
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let repo: Arc<dyn ItemRepositoryPort> = Arc::new(InMemoryItemStore::new());
        let result = GetItemHandler::new(repo)
            .handle(GetItem { item_id: ItemId::new(99) })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo: Arc<dyn ItemRepositoryPort> = Arc::new(InMemoryItemStore::new());
        let items = ListItemsHandler::new(repo).handle(ListItems).await.unwrap();
        assert!(items.is_empty());
    }
}
