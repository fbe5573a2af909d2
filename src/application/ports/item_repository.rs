//! Item Repository Port - 出站端口
//!
//! 定义条目存储的抽象接口
//! 具体实现在 infrastructure 层（内存表）

use thiserror::Error;

use crate::domain::{Item, ItemDraft, ItemId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Item Repository Port
///
/// 所有操作都是同步的：一次调用只持有一次锁，不会跨越 await
pub trait ItemRepositoryPort: Send + Sync {
    /// 获取所有条目（按 id 升序）
    fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// 分配下一个 ID 并插入
    fn create(&self, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// 根据 ID 获取条目
    fn get(&self, id: ItemId) -> Result<Item, RepositoryError>;

    /// 整体替换条目字段，保留原 ID
    fn replace(&self, id: ItemId, draft: ItemDraft) -> Result<Item, RepositoryError>;

    /// 删除条目
    fn delete(&self, id: ItemId) -> Result<(), RepositoryError>;

    /// 当前条目数
    fn count(&self) -> Result<usize, RepositoryError>;
}
