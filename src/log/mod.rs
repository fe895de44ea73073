//! 日志模块
//!
//! 同步、结构化的 JSON 行日志，每次调用输出一行完整的 JSON 对象：
//!
//! ```text
//! {"level":"info","facility":"svc-a","message":"payment ok","trace":["txn=42","location: file 'src/main.rs' on line: 12"],"timestamp":"2026-01-02T03:04:05Z"}
//! ```
//!
//! # 特性
//!
//! - 九个日志级别：debug, info, notice, warn, error, crit, alert, emergency, fatal
//! - 可替换的格式化器：FastJsonFormatter、JsonFormatter
//! - 可运行时切换的输出目标：ConsoleSink、FileSink、WriterSink、MemorySink、DiscardSink
//! - 可复用的序列化缓冲区，超大缓冲区不回池
//! - 基于 TypeOptions 配置动态创建组件
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use sylog::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoggerConfig::from_json(r#"
//!         {
//!             facility: "pay-service",
//!             level: "info",
//!             formatter: { type: "FastJsonFormatter" },
//!             sink: {
//!                 type: "ConsoleSink",
//!                 options: { target: "stderr", auto_flush: true }
//!             }
//!         }
//!     "#)?;
//!
//!     let logger = Logger::new(config)?;
//!     logger.info(vec!["payment ok".into(), "txn=42".into()]);
//!
//!     // 默认 Logger
//!     log_info("svc-a", vec!["payment ok".into()]);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatter;
pub mod global;
pub mod level;
pub mod location;
pub mod logger;
pub mod macros;
pub mod pool;
pub mod record;
pub mod sink;
pub mod value;

pub use error::{Result, SylogError};
pub use formatter::{
    create_formatter_from_options, register_formatters, FastJsonFormatter,
    FastJsonFormatterConfig, JsonFormatter, JsonFormatterConfig, LogFormatter,
};
pub use global::{
    default_logger, init_global_logger, log, log_alert, log_critical, log_debug, log_emergency,
    log_error, log_fatal, log_info, log_notice, log_warning, new, new_with_options, set_default_logger,
    set_output,
};
pub use level::LogLevel;
pub use location::{caller, locate, LOCATION_UNKNOWN};
pub use logger::{Logger, LoggerConfig};
pub use pool::{BufferPool, BufferPoolConfig, PooledBuffer};
pub use record::LogRecord;
pub use sink::{
    create_sink_from_options, register_sinks, ConsoleSink, ConsoleSinkConfig, ConsoleTarget,
    DiscardSink, DiscardSinkConfig, FileSink, FileSinkConfig, LogSink, MemorySink, Output,
    WriterSink,
};
pub use value::LogValue;
