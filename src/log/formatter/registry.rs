use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::formatter::LogFormatter;
use crate::log::formatter::{
    fast_json_formatter::{FastJsonFormatter, FastJsonFormatterConfig},
    json_formatter::{JsonFormatter, JsonFormatterConfig},
};
use anyhow::Result;

/// 注册所有 Formatter 实现
pub fn register_formatters() -> Result<()> {
    register_trait::<JsonFormatter, dyn LogFormatter, JsonFormatterConfig>("JsonFormatter")?;
    register_trait::<FastJsonFormatter, dyn LogFormatter, FastJsonFormatterConfig>(
        "FastJsonFormatter",
    )?;
    Ok(())
}

/// 从 TypeOptions 创建 Formatter
pub fn create_formatter_from_options(options: &TypeOptions) -> Result<Box<dyn LogFormatter>> {
    create_trait_from_type_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogLevel, LogRecord};

    #[test]
    fn test_create_json_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::from_json(r#"{ type: "JsonFormatter", options: {} }"#)?;
        let formatter = create_formatter_from_options(&opts)?;
        let record = LogRecord::build(LogLevel::Info, None, vec!["msg".into()], None);
        assert!(formatter.format(&record).is_ok());

        Ok(())
    }

    #[test]
    fn test_create_fast_json_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::from_json(r#"{ type: "FastJsonFormatter" }"#)?;
        let formatter = create_formatter_from_options(&opts)?;
        let record = LogRecord::build(LogLevel::Info, None, vec!["msg".into()], None);
        assert!(formatter.format(&record)?.contains("\"message\":\"msg\""));

        Ok(())
    }

    #[test]
    fn test_create_unknown_formatter() -> Result<()> {
        register_formatters()?;

        let opts = TypeOptions::of("TextFormatter");
        assert!(create_formatter_from_options(&opts).is_err());

        Ok(())
    }
}
