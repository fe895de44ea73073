use crate::log::sink::LogSink;
use anyhow::Result;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// FileSink 配置
#[derive(Debug, Clone, Deserialize)]
pub struct FileSinkConfig {
    /// 日志文件路径
    pub file_path: String,
}

/// 文件输出
///
/// 以追加模式打开文件，父目录不存在时自动创建
pub struct FileSink {
    file: Mutex<File>,
    config: FileSinkConfig,
}

impl FileSink {
    pub fn new(config: FileSinkConfig) -> Result<Self> {
        let path = PathBuf::from(&config.file_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            file: Mutex::new(file),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }
}

impl LogSink for FileSink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(record)
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()
    }
}

crate::impl_try_from!(FileSinkConfig => FileSink);
crate::impl_box_from!(FileSink => dyn LogSink);
