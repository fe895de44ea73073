use crate::cfg::TypeOptions;
use crate::log::error::{Result as LogResult, SylogError};
use crate::log::formatter::{create_formatter_from_options, FastJsonFormatter, LogFormatter};
use crate::log::level::LogLevel;
use crate::log::pool::{BufferPool, BufferPoolConfig};
use crate::log::record::LogRecord;
use crate::log::sink::{create_sink_from_options, ConsoleSink, LogSink, Output};
use crate::log::value::LogValue;
use anyhow::Result;
use garde::Validate;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Logger 配置
///
/// ```ignore
/// {
///     facility: "pay-service",
///     level: "info",
///     formatter: { type: "FastJsonFormatter" },
///     sink: { type: "FileSink", options: { file_path: "/var/log/pay.log" } },
///     pool: { initial_capacity: 512, max_retained_capacity: 65536 },
/// }
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq, Validate)]
#[serde(default)]
pub struct LoggerConfig {
    /// 服务或子系统名称，为空时输出中不包含 facility
    #[garde(length(min = 1))]
    pub facility: Option<String>,

    /// 最低输出级别
    #[default(LogLevel::Debug)]
    #[garde(skip)]
    pub level: LogLevel,

    /// Formatter 配置
    #[default(TypeOptions::of("FastJsonFormatter"))]
    #[garde(skip)]
    pub formatter: TypeOptions,

    /// Sink 配置
    #[default(TypeOptions::of("ConsoleSink"))]
    #[garde(skip)]
    pub sink: TypeOptions,

    /// 缓冲池配置
    #[garde(dive)]
    pub pool: BufferPoolConfig,
}

impl LoggerConfig {
    /// 从 JSON5 字符串解析
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }
}

/// 注册结果，只注册一次，失败时之后每次创建 Logger 都返回同一个错误
static REGISTERED: OnceCell<std::result::Result<(), String>> = OnceCell::new();

fn register_components() -> Result<()> {
    register_once(&REGISTERED, || {
        crate::log::register_formatters()?;
        crate::log::register_sinks()
    })
}

fn register_once(
    cell: &OnceCell<std::result::Result<(), String>>,
    register: impl FnOnce() -> Result<()>,
) -> Result<()> {
    cell.get_or_init(|| register().map_err(|e| format!("{:#}", e)))
        .clone()
        .map_err(|e| SylogError::Config(format!("failed to register log components: {}", e)).into())
}

/// 核心日志器
///
/// 负责级别过滤、构建记录、序列化到池化缓冲区并写入输出目标。
/// 所有日志方法都是同步的，写入完成后才返回。
pub struct Logger {
    facility: Option<String>,
    level: Arc<RwLock<LogLevel>>,
    formatter: Arc<dyn LogFormatter>,
    output: Arc<Output>,
    pool: Arc<BufferPool>,
    failed_writes: Arc<AtomicU64>,
}

impl Logger {
    /// 从配置创建 Logger
    pub fn new(config: LoggerConfig) -> Result<Self> {
        if let Err(errors) = config.validate() {
            return Err(SylogError::Config(errors.to_string()).into());
        }

        register_components()?;

        let formatter: Arc<dyn LogFormatter> =
            Arc::from(create_formatter_from_options(&config.formatter)?);
        let sink = create_sink_from_options(&config.sink)?;

        Ok(Self {
            facility: config.facility,
            level: Arc::new(RwLock::new(config.level)),
            formatter,
            output: Arc::new(Output::new(sink)),
            pool: Arc::new(BufferPool::new(config.pool)),
            failed_writes: Arc::new(AtomicU64::new(0)),
        })
    }

    /// 从 JSON5 配置字符串创建 Logger
    pub fn from_json(json_str: &str) -> Result<Self> {
        Self::new(LoggerConfig::from_json(json_str)?)
    }

    /// 绑定 facility 的 Logger
    ///
    /// 与原 Logger 共享级别、formatter、输出目标和缓冲池
    pub fn with_facility(&self, facility: impl Into<String>) -> Logger {
        let facility = facility.into();
        Logger {
            facility: (!facility.is_empty()).then_some(facility),
            level: Arc::clone(&self.level),
            formatter: Arc::clone(&self.formatter),
            output: Arc::clone(&self.output),
            pool: Arc::clone(&self.pool),
            failed_writes: Arc::clone(&self.failed_writes),
        }
    }

    pub fn facility(&self) -> Option<&str> {
        self.facility.as_deref()
    }

    /// 设置日志级别
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    /// 获取当前日志级别
    pub fn level(&self) -> LogLevel {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// 替换输出目标，对之后的写入立即生效
    pub fn set_output(&self, sink: impl LogSink + 'static) {
        self.output.set(Box::new(sink));
    }

    pub fn flush(&self) -> LogResult<()> {
        Ok(self.output.flush()?)
    }

    /// 写入失败被忽略的次数
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// 记录日志，返回写入错误
    #[track_caller]
    pub fn try_log(&self, level: LogLevel, args: Vec<LogValue>) -> LogResult<()> {
        self.write(level, None, args, Location::caller())
    }

    /// 记录日志，错误只计数不返回
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: Vec<LogValue>) {
        self.write_or_count(level, None, args, Location::caller())
    }

    /// facility 非空时覆盖 Logger 自身的 facility
    pub(crate) fn write(
        &self,
        level: LogLevel,
        facility: Option<&str>,
        args: Vec<LogValue>,
        location: &Location<'_>,
    ) -> LogResult<()> {
        if level < self.level() {
            return Ok(());
        }

        let facility = facility
            .filter(|f| !f.is_empty())
            .or(self.facility.as_deref());
        let record = LogRecord::build(level, facility, args, Some(location));

        let mut buf = self.pool.acquire();
        self.formatter.format_into(&record, &mut buf)?;
        self.output.write(&buf)?;
        Ok(())
    }

    pub(crate) fn write_or_count(
        &self,
        level: LogLevel,
        facility: Option<&str>,
        args: Vec<LogValue>,
        location: &Location<'_>,
    ) {
        if self.write(level, facility, args, location).is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// 记录 DEBUG 级别日志
    #[track_caller]
    pub fn debug(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Debug, args)
    }

    /// 记录 INFO 级别日志
    #[track_caller]
    pub fn info(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Info, args)
    }

    /// 记录 NOTICE 级别日志
    #[track_caller]
    pub fn notice(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Notice, args)
    }

    /// 记录 WARN 级别日志
    #[track_caller]
    pub fn warning(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Warning, args)
    }

    /// 记录 ERROR 级别日志
    #[track_caller]
    pub fn error(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Error, args)
    }

    /// 记录 CRIT 级别日志
    #[track_caller]
    pub fn critical(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Critical, args)
    }

    /// 记录 ALERT 级别日志
    #[track_caller]
    pub fn alert(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Alert, args)
    }

    /// 记录 EMERGENCY 级别日志
    #[track_caller]
    pub fn emergency(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Emergency, args)
    }

    /// 记录 FATAL 级别日志，不会终止进程
    #[track_caller]
    pub fn fatal(&self, args: Vec<LogValue>) {
        self.log(LogLevel::Fatal, args)
    }
}

impl Default for Logger {
    /// 输出到 stdout、不带 facility、记录所有级别
    fn default() -> Self {
        Self {
            facility: None,
            level: Arc::new(RwLock::new(LogLevel::Debug)),
            formatter: Arc::new(FastJsonFormatter::default()),
            output: Arc::new(Output::new(Box::new(ConsoleSink::stdout()))),
            pool: Arc::new(BufferPool::default()),
            failed_writes: Arc::new(AtomicU64::new(0)),
        }
    }
}
