use crate::cfg::{create_trait_from_type_options, register_trait, TypeOptions};
use crate::log::sink::LogSink;
use crate::log::sink::{
    console_sink::{ConsoleSink, ConsoleSinkConfig},
    file_sink::{FileSink, FileSinkConfig},
    memory_sink::{DiscardSink, DiscardSinkConfig},
};
use anyhow::Result;

/// 注册所有 Sink 实现
pub fn register_sinks() -> Result<()> {
    register_trait::<ConsoleSink, dyn LogSink, ConsoleSinkConfig>("ConsoleSink")?;
    register_trait::<FileSink, dyn LogSink, FileSinkConfig>("FileSink")?;
    register_trait::<DiscardSink, dyn LogSink, DiscardSinkConfig>("DiscardSink")?;
    Ok(())
}

/// 从 TypeOptions 创建 Sink
pub fn create_sink_from_options(options: &TypeOptions) -> Result<Box<dyn LogSink>> {
    create_trait_from_type_options(options)
}
