//! Item Context - 条目限界上下文
//!
//! 职责:
//! - Item 实体与标识
//! - 创建/替换时使用的字段草稿

mod entities;
mod value_objects;

pub use entities::{Item, ItemDraft};
pub use value_objects::ItemId;
