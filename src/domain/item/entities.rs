//! Item Context - Entities

use super::ItemId;

/// Item 实体
///
/// 不变量:
/// - id 由存储层分配，之后只能通过同 key 整体替换保持不变
/// - first_name / last_name / age 不做任何校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl Item {
    /// 用草稿和分配的 ID 组装实体
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
        }
    }

    /// 去掉 ID 后的字段
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
        }
    }
}

/// Item 除 id 外的全部字段（创建和整体替换时使用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl ItemDraft {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i64) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }
}
