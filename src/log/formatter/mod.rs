mod core;
mod fast_json_formatter;
mod json_formatter;
mod registry;

pub use self::core::LogFormatter;
pub use fast_json_formatter::{FastJsonFormatter, FastJsonFormatterConfig};
pub use json_formatter::{JsonFormatter, JsonFormatterConfig};
pub use registry::{create_formatter_from_options, register_formatters};
