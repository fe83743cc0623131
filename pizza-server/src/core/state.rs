use crate::core::Config;
use crate::db::DocumentStore;
use crate::db::repository::PizzaRepository;
use crate::db::seed::seed_pizzas;

/// 服务器状态 - 每个请求共享的只读句柄
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | DocumentStore | 文档存储 (可能处于降级模式) |
///
/// Cloning is shallow; the store handle shares one connection.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: DocumentStore,
}

impl ServerState {
    pub fn new(config: Config, store: DocumentStore) -> Self {
        Self { config, store }
    }

    /// 初始化服务器状态
    ///
    /// 1. 连接文档存储 (失败时进入降级模式)
    /// 2. 按配置填充示例菜单
    pub async fn initialize(config: &Config) -> Self {
        let store = DocumentStore::connect(&config.store).await;

        if config.seed_on_startup {
            let repo = PizzaRepository::new(store.clone());
            match seed_pizzas(&repo).await {
                Ok(0) => {}
                Ok(count) => tracing::info!(count, "Menu seeded"),
                Err(e) => tracing::error!(error = %e, "Menu seeding failed"),
            }
        }

        Self::new(config.clone(), store)
    }
}
