//! Item Commands

use crate::domain::{ItemDraft, ItemId};

/// 创建条目命令（ID 由存储层分配）
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub draft: ItemDraft,
}

/// 整体替换条目命令
#[derive(Debug, Clone)]
pub struct ReplaceItem {
    pub item_id: ItemId,
    pub draft: ItemDraft,
}

/// 删除条目命令
#[derive(Debug, Clone)]
pub struct DeleteItem {
    pub item_id: ItemId,
}
