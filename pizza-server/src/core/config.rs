/// 服务器配置 - all settings come from the environment
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_URL | mem:// | SurrealDB endpoint |
/// | DATABASE_NAMESPACE | pizza | namespace |
/// | DATABASE_NAME | pizza | database name |
/// | DATABASE_USER / DATABASE_PASS | - | root credentials (remote stores) |
/// | DATABASE_CONNECT_TIMEOUT_MS | 5000 | connection bootstrap timeout |
/// | LOG_LEVEL | info | log level when RUST_LOG is unset |
/// | SEED_ON_STARTUP | true | insert the sample menu into an empty store |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=ws://localhost:8001 PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 日志级别
    pub log_level: String,
    /// 启动时填充示例菜单
    pub seed_on_startup: bool,
    /// Document store connection
    pub store: StoreConfig,
}

/// Document store connection settings
#[derive(Clone)]
pub struct StoreConfig {
    pub url: String,
    /// Whether `url` came from DATABASE_URL rather than the default
    pub url_from_env: bool,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub connect_timeout_ms: u64,
}

pub const DEFAULT_DATABASE_URL: &str = "mem://";
pub const DEFAULT_HTTP_PORT: u16 = 8000;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            seed_on_startup: std::env::var("SEED_ON_STARTUP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            store: StoreConfig::from_env(),
        }
    }

    /// 使用内存数据库的配置
    ///
    /// 常用于测试场景
    pub fn in_memory() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            log_level: "info".into(),
            seed_on_startup: true,
            store: StoreConfig::in_memory(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty());
        Self {
            url_from_env: url.is_some(),
            url: url.unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            namespace: std::env::var("DATABASE_NAMESPACE").unwrap_or_else(|_| "pizza".into()),
            database: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "pizza".into()),
            username: std::env::var("DATABASE_USER").ok(),
            password: std::env::var("DATABASE_PASS").ok(),
            connect_timeout_ms: std::env::var("DATABASE_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// Fresh embedded store; every connection gets its own instance
    pub fn in_memory() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            url_from_env: false,
            namespace: "pizza".into(),
            database: "pizza".into(),
            username: None,
            password: None,
            connect_timeout_ms: 5000,
        }
    }
}

// Credentials stay out of logs
impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("url_from_env", &self.url_from_env)
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}
