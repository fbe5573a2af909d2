//! Item Queries

use crate::domain::ItemId;

/// 获取条目详情查询
#[derive(Debug, Clone)]
pub struct GetItem {
    pub item_id: ItemId,
}

/// 列出所有条目查询
#[derive(Debug, Clone)]
pub struct ListItems;
