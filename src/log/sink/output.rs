use crate::log::sink::LogSink;
use arc_swap::ArcSwap;
use std::io;
use std::sync::Arc;

/// 可在运行时替换的输出目标
///
/// 写入时先取当前 sink 的快照再写，替换与写入并发时每条记录完整地落在旧 sink 或新 sink 上
pub struct Output {
    sink: ArcSwap<Box<dyn LogSink>>,
}

impl Output {
    pub fn new(sink: Box<dyn LogSink>) -> Self {
        Self {
            sink: ArcSwap::from_pointee(sink),
        }
    }

    /// 替换输出目标，对之后的写入立即生效，返回旧的 sink
    pub fn set(&self, sink: Box<dyn LogSink>) -> Arc<Box<dyn LogSink>> {
        self.sink.swap(Arc::new(sink))
    }

    /// 写入一条记录
    pub fn write(&self, record: &[u8]) -> io::Result<()> {
        self.sink.load().write_record(record)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.load().flush()
    }
}
