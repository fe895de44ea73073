/// 日志宏模块
///
/// 参数逐个经过 `LogValue::from` 转换，调用位置取宏展开处
///
/// # 示例
///
/// ```ignore
/// use sylog::{info, log_info};
///
/// // 默认 Logger，指定 facility
/// log_info!("svc-a", "payment ok", "txn=42");
///
/// // 指定 Logger
/// let logger = sylog::log::new("pay-service");
/// info!(logger, "user logged in", 12345, "alice");
/// ```

/// 使用默认 Logger 记录 DEBUG 级别日志
#[macro_export]
macro_rules! log_debug {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_debug($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 INFO 级别日志
#[macro_export]
macro_rules! log_info {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_info($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 NOTICE 级别日志
#[macro_export]
macro_rules! log_notice {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_notice($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 WARN 级别日志
#[macro_export]
macro_rules! log_warning {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_warning($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 ERROR 级别日志
#[macro_export]
macro_rules! log_error {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_error($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 CRIT 级别日志
#[macro_export]
macro_rules! log_critical {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_critical($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 ALERT 级别日志
#[macro_export]
macro_rules! log_alert {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_alert($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 EMERGENCY 级别日志
#[macro_export]
macro_rules! log_emergency {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_emergency($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用默认 Logger 记录 FATAL 级别日志
#[macro_export]
macro_rules! log_fatal {
    ($facility:expr $(, $arg:expr)* $(,)?) => {
        $crate::log::log_fatal($facility, ::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// info!(logger, "user logged in", 12345, "alice");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 NOTICE 级别日志
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.notice(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 WARN 级别日志
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warning(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 ERROR 级别日志
///
/// # 示例
///
/// ```ignore
/// error!(logger, "connection failed", "host=db-1");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 CRIT 级别日志
#[macro_export]
macro_rules! critical {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.critical(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 ALERT 级别日志
#[macro_export]
macro_rules! alert {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.alert(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 EMERGENCY 级别日志
#[macro_export]
macro_rules! emergency {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.emergency(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

/// 使用指定 Logger 记录 FATAL 级别日志
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal(::std::vec![$($crate::log::LogValue::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::log::{LogLevel, LogRecord, LogValue, Logger, MemorySink};
    use serial_test::serial;

    fn records(sink: &MemorySink) -> Vec<LogRecord> {
        sink.lines()
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_logger_macros() {
        let logger = Logger::default();
        let sink = MemorySink::new();
        logger.set_output(sink.clone());

        crate::info!(logger, "user logged in", 12345, "alice", true);
        let line = line!() - 1;
        crate::error!(logger);
        crate::fatal!(&logger, "bye",);

        let records = records(&sink);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "user logged in");
        assert_eq!(
            &records[0].trace[..3],
            &[LogValue::I64(12345), LogValue::from("alice"), LogValue::Bool(true)]
        );
        assert_eq!(
            records[0].location().unwrap(),
            format!("location: file '{}' on line: {}", file!(), line)
        );
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(records[1].message, "");
        assert_eq!(records[2].level, LogLevel::Fatal);
    }

    #[test]
    fn test_every_logger_macro() {
        let logger = Logger::default();
        let sink = MemorySink::new();
        logger.set_output(sink.clone());

        crate::debug!(logger, "m");
        crate::info!(logger, "m");
        crate::notice!(logger, "m");
        crate::warning!(logger, "m");
        crate::error!(logger, "m");
        crate::critical!(logger, "m");
        crate::alert!(logger, "m");
        crate::emergency!(logger, "m");
        crate::fatal!(logger, "m");

        let levels: Vec<LogLevel> = records(&sink).iter().map(|r| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    #[serial]
    fn test_global_macros() {
        crate::log::set_default_logger(Logger::default());
        let sink = MemorySink::new();
        crate::log::set_output(sink.clone());

        crate::log_info!("svc-a", "payment ok", "txn=42");
        let line = line!() - 1;
        crate::log_warning!("svc-a");
        crate::log_critical!("svc-a", 3.5, Option::<i64>::None);

        let records = records(&sink);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].facility.as_deref(), Some("svc-a"));
        assert_eq!(records[0].trace[0], LogValue::from("txn=42"));
        assert_eq!(
            records[0].location().unwrap(),
            format!("location: file '{}' on line: {}", file!(), line)
        );
        assert_eq!(records[1].message, "");
        assert_eq!(records[2].message, "3.5");
        assert_eq!(records[2].trace[0], LogValue::Null);
    }
}
