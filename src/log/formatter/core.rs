use crate::log::error::Result;
use crate::log::record::LogRecord;

/// 日志格式化器 trait
///
/// 负责将 LogRecord 序列化为以换行结尾的单行 JSON
pub trait LogFormatter: Send + Sync {
    /// 追加写入到 buf，不清空已有内容
    fn format_into(&self, record: &LogRecord, buf: &mut Vec<u8>) -> Result<()>;

    /// 格式化为字符串
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        self.format_into(record, &mut buf)?;
        // 两种实现只写入合法 UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
