//! In-Memory Item Store Implementation

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::application::ports::{ItemRepositoryPort, RepositoryError};
use crate::domain::{Item, ItemDraft, ItemId};

/// 受锁保护的表
struct ItemTable {
    /// item_id -> Item，key 始终等于 Item.id
    items: BTreeMap<ItemId, Item>,
    /// 大于所有已分配过的 ID
    next_id: ItemId,
}

/// 内存条目存储
///
/// 单把互斥锁串行化所有读写；ID 单调递增所以 BTreeMap 的顺序就是插入顺序
pub struct InMemoryItemStore {
    table: Mutex<ItemTable>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ItemTable {
                items: BTreeMap::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ItemTable>, RepositoryError> {
        self.table.lock().map_err(|_| {
            tracing::error!("Item store lock poisoned");
            RepositoryError::LockPoisoned
        })
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRepositoryPort for InMemoryItemStore {
    fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let table = self.lock()?;
        Ok(table.items.values().cloned().collect())
    }

    fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let mut table = self.lock()?;
        let id = table.next_id;
        let item = Item::from_draft(id, draft);
        table.items.insert(id, item.clone());
        table.next_id = id.next();
        tracing::debug!(item_id = %id, next_id = %table.next_id, "Item inserted");
        Ok(item)
    }

    fn get(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let table = self.lock()?;
        table
            .items
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn replace(&self, id: ItemId, draft: ItemDraft) -> Result<Item, RepositoryError> {
        let mut table = self.lock()?;
        let slot = table
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        *slot = Item::from_draft(id, draft);
        Ok(slot.clone())
    }

    fn delete(&self, id: ItemId) -> Result<(), RepositoryError> {
        let mut table = self.lock()?;
        table
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.items.len())
    }
}
