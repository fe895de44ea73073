use crate::log::error::Result;
use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use crate::log::value::{unserializable, LogValue};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::Write;

/// FastJsonFormatter 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct FastJsonFormatterConfig {}

/// 手工拼接的 JSON 格式化器
///
/// 不经过 Serialize 派生，直接按固定 key 顺序写入字节；所有字符串都会做 JSON 转义，
/// 非字符串的 trace 项交给 serde_json 输出
pub struct FastJsonFormatter {}

impl FastJsonFormatter {
    pub fn new(_: FastJsonFormatterConfig) -> Self {
        Self {}
    }
}

impl Default for FastJsonFormatter {
    fn default() -> Self {
        Self::new(FastJsonFormatterConfig::default())
    }
}

impl LogFormatter for FastJsonFormatter {
    fn format_into(&self, record: &LogRecord, buf: &mut Vec<u8>) -> Result<()> {
        write_record(record, buf);
        Ok(())
    }
}

/// 写入完整的一行记录，不会失败
pub(crate) fn write_record(record: &LogRecord, buf: &mut Vec<u8>) {
    buf.extend_from_slice(b"{\"level\":\"");
    buf.extend_from_slice(record.level.as_str().as_bytes());
    buf.push(b'"');

    if let Some(facility) = &record.facility {
        buf.extend_from_slice(b",\"facility\":");
        write_json_str(buf, facility);
    }

    buf.extend_from_slice(b",\"message\":");
    write_json_str(buf, &record.message);

    buf.extend_from_slice(b",\"trace\":[");
    for (i, entry) in record.trace.iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        write_value(buf, entry);
    }

    buf.extend_from_slice(b"],\"timestamp\":");
    write_json_str(buf, &record.timestamp);
    buf.extend_from_slice(b"}\n");
}

fn write_value(buf: &mut Vec<u8>, value: &LogValue) {
    match value {
        LogValue::String(s) => write_json_str(buf, s),
        LogValue::I64(n) => {
            let _ = write!(buf, "{}", n);
        }
        LogValue::U64(n) => {
            let _ = write!(buf, "{}", n);
        }
        LogValue::Bool(b) => buf.extend_from_slice(if *b { b"true" } else { b"false" }),
        LogValue::Null => buf.extend_from_slice(b"null"),
        other => {
            let start = buf.len();
            if let Err(e) = serde_json::to_writer(&mut *buf, other) {
                buf.truncate(start);
                write_json_str(buf, &unserializable(&e));
            }
        }
    }
}

/// 写入带引号并转义的 JSON 字符串
pub(crate) fn write_json_str(buf: &mut Vec<u8>, s: &str) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    buf.push(b'"');
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let escape: &[u8] = match b {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0c => b"\\f",
            0x00..=0x1f => b"",
            _ => continue,
        };
        buf.extend_from_slice(&bytes[start..i]);
        if escape.is_empty() {
            buf.extend_from_slice(b"\\u00");
            buf.push(HEX[(b >> 4) as usize]);
            buf.push(HEX[(b & 0x0f) as usize]);
        } else {
            buf.extend_from_slice(escape);
        }
        start = i + 1;
    }
    buf.extend_from_slice(&bytes[start..]);
    buf.push(b'"');
}

crate::impl_from!(FastJsonFormatterConfig => FastJsonFormatter);
crate::impl_box_from!(FastJsonFormatter => dyn LogFormatter);
