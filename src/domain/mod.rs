//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Item Context: 条目管理

pub mod item;

pub use item::{Item, ItemDraft, ItemId};
