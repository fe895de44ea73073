mod console_sink;
mod file_sink;
mod memory_sink;
mod output;
mod registry;
mod trait_;

pub use console_sink::{ConsoleSink, ConsoleSinkConfig, ConsoleTarget};
pub use file_sink::{FileSink, FileSinkConfig};
pub use memory_sink::{DiscardSink, DiscardSinkConfig, MemorySink, WriterSink};
pub use output::Output;
pub use registry::{create_sink_from_options, register_sinks};
pub use trait_::LogSink;
