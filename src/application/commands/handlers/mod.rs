//! Command Handlers 实现

mod item_handlers;

pub use item_handlers::*;
