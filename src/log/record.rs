use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::panic::Location;

use crate::log::level::LogLevel;
use crate::log::location::locate;
use crate::log::value::LogValue;

/// 日志记录
///
/// 字段顺序即输出 JSON 的 key 顺序：level, facility, message, trace, timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 产生日志的服务或子系统，为空时不输出该字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    /// 日志消息
    pub message: String,
    /// 附加上下文，最后一项总是调用位置
    pub trace: Vec<LogValue>,
    /// 记录创建时间（RFC 3339）
    pub timestamp: String,
}

impl LogRecord {
    /// 由日志参数构建记录
    ///
    /// 第一个参数转成文本作为 message（非字符串参数按 Display 转换，不会失败），
    /// 其余参数按顺序进入 trace，最后追加调用位置。没有参数时 message 为空字符串。
    pub fn build(
        level: LogLevel,
        facility: Option<&str>,
        args: Vec<LogValue>,
        location: Option<&Location<'_>>,
    ) -> Self {
        let mut args = args.into_iter();

        let message = match args.next() {
            Some(LogValue::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let mut trace: Vec<LogValue> = Vec::with_capacity(args.len() + 1);
        trace.extend(args);
        trace.push(LogValue::String(locate(location)));

        Self {
            level,
            facility: facility.map(str::to_string),
            message,
            trace,
            timestamp: now_rfc3339(),
        }
    }

    /// 调用位置，即 trace 的最后一项
    pub fn location(&self) -> Option<&str> {
        self.trace.last().and_then(LogValue::as_str)
    }
}

/// 当前 UTC 时间，精确到秒，例如 `2026-01-02T03:04:05Z`
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
