//! HTTP Handlers

mod item;
mod ping;

pub use item::*;
pub use ping::*;
