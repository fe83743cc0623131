//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ValidatedJson`] - 带校验的 JSON 提取器
//! - 日志初始化

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
pub use validation::ValidatedJson;
