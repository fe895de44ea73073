//! Sylog - 结构化 JSON 行日志库
//!
//! ## 模块
//!
//! - **cfg**: 基于 TypeOptions 的组件配置与注册
//! - **log**: 日志级别、记录构建、格式化、缓冲池与输出目标
//!
//! ## 使用
//!
//! ```rust,no_run
//! use sylog::log_info;
//!
//! log_info!("svc-a", "payment ok", "txn=42");
//! ```

pub mod cfg;
pub mod log;

pub use cfg::{create_trait_from_type_options, register_trait, TypeOptions};

pub use log::{
    LogFormatter, LogLevel, LogRecord, LogSink, LogValue, Logger, LoggerConfig, SylogError,
};
