use crate::log::sink::LogSink;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 终端输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleSink 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct ConsoleSinkConfig {
    /// 输出到 stdout 或 stderr
    pub target: ConsoleTarget,

    /// 每条记录写入后立即 flush
    #[default = true]
    pub auto_flush: bool,
}

/// 终端输出
///
/// 写入时持有 stdout / stderr 的锁，同一进程内的记录不会交错
pub struct ConsoleSink {
    config: ConsoleSinkConfig,
}

impl ConsoleSink {
    pub fn new(config: ConsoleSinkConfig) -> Self {
        Self { config }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleSinkConfig::default())
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleSinkConfig {
            target: ConsoleTarget::Stderr,
            ..Default::default()
        })
    }

    pub fn target(&self) -> ConsoleTarget {
        self.config.target
    }
}

fn write_locked(mut out: impl Write, record: &[u8], auto_flush: bool) -> io::Result<()> {
    out.write_all(record)?;
    if auto_flush {
        out.flush()?;
    }
    Ok(())
}

impl LogSink for ConsoleSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        match self.config.target {
            ConsoleTarget::Stdout => write_locked(io::stdout().lock(), record, self.config.auto_flush),
            ConsoleTarget::Stderr => write_locked(io::stderr().lock(), record, self.config.auto_flush),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self.config.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        }
    }
}

crate::impl_from!(ConsoleSinkConfig => ConsoleSink);
crate::impl_box_from!(ConsoleSink => dyn LogSink);
