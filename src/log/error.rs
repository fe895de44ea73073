use thiserror::Error;

/// 日志写入过程中的错误
#[derive(Debug, Error)]
pub enum SylogError {
    #[error("failed to serialize log record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write to sink: {0}")]
    Sink(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SylogError>;
