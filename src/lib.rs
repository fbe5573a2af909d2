//! itemstore - 内存条目 CRUD 服务
//!
//! 分层结构:
//!
//! 领域层 (domain/):
//! - Item Context: Item 实体、ItemId、ItemDraft
//!
//! 应用层 (application/):
//! - Ports: ItemRepositoryPort
//! - Commands: 创建 / 替换 / 删除
//! - Queries: 获取 / 列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum RESTful API
//! - Memory: 单锁保护的内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
