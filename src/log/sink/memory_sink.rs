use crate::log::sink::LogSink;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// 内存输出
///
/// clone 出的实例共享同一块缓冲区，适合在测试中重定向输出后检查内容
#[derive(Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的全部内容
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// 按行拆分的内容
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(record);
        Ok(())
    }
}

/// 包装任意 `io::Write`
pub struct WriterSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl LogSink for WriterSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(record)
    }

    fn flush(&self) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()
    }
}

/// DiscardSink 配置
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct DiscardSinkConfig {}

/// 丢弃所有输出，用于基准测试
pub struct DiscardSink {}

impl DiscardSink {
    pub fn new(_: DiscardSinkConfig) -> Self {
        Self {}
    }
}

impl Default for DiscardSink {
    fn default() -> Self {
        Self::new(DiscardSinkConfig::default())
    }
}

impl LogSink for DiscardSink {
    fn write_record(&self, _: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

crate::impl_from!(DiscardSinkConfig => DiscardSink);
crate::impl_box_from!(DiscardSink => dyn LogSink);
