use crate::log::level::LogLevel;
use crate::log::logger::{Logger, LoggerConfig};
use crate::log::sink::LogSink;
use crate::log::value::LogValue;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::panic::Location;
use std::sync::Arc;

/// 进程级默认 Logger
///
/// 默认输出到 stdout，不带 facility，记录所有级别
static GLOBAL_LOGGER: once_cell::sync::Lazy<ArcSwap<Logger>> =
    once_cell::sync::Lazy::new(|| ArcSwap::from_pointee(Logger::default()));

/// 用配置替换默认 Logger
///
/// # 示例
///
/// ```ignore
/// use sylog::log::{init_global_logger, LoggerConfig};
///
/// fn example() -> anyhow::Result<()> {
///     let config = LoggerConfig::from_json(r#"{ level: "info", sink: { type: "ConsoleSink", options: { target: "stderr" } } }"#)?;
///     init_global_logger(config)?;
///     Ok(())
/// }
/// ```
pub fn init_global_logger(config: LoggerConfig) -> Result<()> {
    let logger = Logger::new(config)?;
    GLOBAL_LOGGER.store(Arc::new(logger));
    Ok(())
}

/// 直接替换默认 Logger
pub fn set_default_logger(logger: Logger) {
    GLOBAL_LOGGER.store(Arc::new(logger));
}

/// 获取默认 Logger
pub fn default_logger() -> Arc<Logger> {
    GLOBAL_LOGGER.load_full()
}

/// 替换默认 Logger 的输出目标
///
/// 之后所有经由默认 Logger 的写入都进入新的 sink，包括已通过 [`new`] 创建的 Logger
pub fn set_output(sink: impl LogSink + 'static) {
    GLOBAL_LOGGER.load().set_output(sink);
}

/// 创建绑定 facility 的 Logger，与默认 Logger 共享输出目标和级别
pub fn new(facility: &str) -> Logger {
    GLOBAL_LOGGER.load().with_facility(facility)
}

/// 按配置创建独立的 Logger，facility 非空时覆盖配置中的值
pub fn new_with_options(facility: &str, config: LoggerConfig) -> Result<Logger> {
    let logger = Logger::new(config)?;
    if facility.is_empty() {
        return Ok(logger);
    }
    Ok(logger.with_facility(facility))
}

/// 使用默认 Logger 记录指定级别的日志
///
/// facility 为空字符串时使用默认 Logger 自身的 facility
#[track_caller]
pub fn log(level: LogLevel, facility: &str, args: Vec<LogValue>) {
    GLOBAL_LOGGER
        .load()
        .write_or_count(level, Some(facility), args, Location::caller());
}

/// 记录 DEBUG 级别日志（全局）
#[track_caller]
pub fn log_debug(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Debug, facility, args)
}

/// 记录 INFO 级别日志（全局）
#[track_caller]
pub fn log_info(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Info, facility, args)
}

/// 记录 NOTICE 级别日志（全局）
#[track_caller]
pub fn log_notice(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Notice, facility, args)
}

/// 记录 WARN 级别日志（全局）
#[track_caller]
pub fn log_warning(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Warning, facility, args)
}

/// 记录 ERROR 级别日志（全局）
#[track_caller]
pub fn log_error(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Error, facility, args)
}

/// 记录 CRIT 级别日志（全局）
#[track_caller]
pub fn log_critical(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Critical, facility, args)
}

/// 记录 ALERT 级别日志（全局）
#[track_caller]
pub fn log_alert(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Alert, facility, args)
}

/// 记录 EMERGENCY 级别日志（全局）
#[track_caller]
pub fn log_emergency(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Emergency, facility, args)
}

/// 记录 FATAL 级别日志（全局），不会终止进程
#[track_caller]
pub fn log_fatal(facility: &str, args: Vec<LogValue>) {
    log(LogLevel::Fatal, facility, args)
}
