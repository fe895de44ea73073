use std::io;

/// 日志输出目标 trait
///
/// 每次调用写入一条完整的记录，实现方需要保证并发写入时记录之间不会交错
pub trait LogSink: Send + Sync {
    /// 写入一条已序列化的记录（包含结尾换行）
    fn write_record(&self, record: &[u8]) -> io::Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
