use pizza_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env 与日志
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level);

    tracing::info!("🍕 Pizza Delivery Backend starting...");
    tracing::debug!(?config, "Loaded configuration");

    // 2. 连接存储并填充菜单
    let state = ServerState::initialize(&config).await;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
