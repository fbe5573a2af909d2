//! Memory Layer - In-Memory State Management
//!
//! 实现 ItemRepositoryPort，进程重启后数据清空

mod item_store;

pub use item_store::InMemoryItemStore;
