//! Pizza delivery backend
//!
//! Menu listing, item detail, featured items and order intake over HTTP,
//! backed by a SurrealDB document store.
//!
//! - [`core`] - 配置、状态、服务器
//! - [`db`] - 文档存储、仓储、示例数据
//! - [`api`] - HTTP 路由
//! - [`utils`] - 日志与请求校验

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use api::{build_app, build_router};
pub use core::{Config, Server, ServerState, StoreConfig};
pub use db::{Document, DocumentId, DocumentStore, Filter};
pub use utils::logger::init_logger;
