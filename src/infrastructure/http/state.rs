//! Application State
//!
//! 持有 Item 存储端口和所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateItemHandler, DeleteItemHandler, ReplaceItemHandler,
    // Query handlers
    GetItemHandler, ListItemsHandler,
    // Ports
    ItemRepositoryPort,
};

/// 应用状态
///
/// 存储由入口显式构造后传入，测试里可以各自建独立实例
pub struct AppState {
    // ========== Ports ==========
    pub item_repo: Arc<dyn ItemRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_item_handler: CreateItemHandler,
    pub replace_item_handler: ReplaceItemHandler,
    pub delete_item_handler: DeleteItemHandler,

    // ========== Query Handlers ==========
    pub get_item_handler: GetItemHandler,
    pub list_items_handler: ListItemsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(item_repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self {
            item_repo: item_repo.clone(),

            create_item_handler: CreateItemHandler::new(item_repo.clone()),
            replace_item_handler: ReplaceItemHandler::new(item_repo.clone()),
            delete_item_handler: DeleteItemHandler::new(item_repo.clone()),

            get_item_handler: GetItemHandler::new(item_repo.clone()),
            list_items_handler: ListItemsHandler::new(item_repo),
        }
    }
}
