use crate::log::error::Result;
use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use serde::Deserialize;
use smart_default::SmartDefault;

/// JsonFormatter 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct JsonFormatterConfig {}

/// JSON 格式化器
///
/// 直接复用 LogRecord 的 Serialize 实现
pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new(_: JsonFormatterConfig) -> Self {
        Self {}
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(JsonFormatterConfig::default())
    }
}

impl LogFormatter for JsonFormatter {
    fn format_into(&self, record: &LogRecord, buf: &mut Vec<u8>) -> Result<()> {
        serde_json::to_writer(&mut *buf, record)?;
        buf.push(b'\n');
        Ok(())
    }
}

crate::impl_from!(JsonFormatterConfig => JsonFormatter);
crate::impl_box_from!(JsonFormatter => dyn LogFormatter);
