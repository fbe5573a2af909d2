//! itemstore - 内存条目 CRUD 服务
//!
//! 入口负责加载配置、初始化日志、构造存储并启动 HTTP 服务器

use std::sync::Arc;

use itemstore::config::{load_config, print_config, LogConfig};
use itemstore::infrastructure::http::{AppState, HttpServer, ServerConfig};
use itemstore::infrastructure::memory::InMemoryItemStore;

fn init_tracing(log: &LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log.filter_directive()));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        // 收不到信号就一直运行
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("itemstore v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 存储只在内存中，重启后清空
    let item_store = Arc::new(InMemoryItemStore::new());
    let state = AppState::new(item_store);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
