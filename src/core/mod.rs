//! Core types and traits shared by both engines

pub mod appender;
pub mod config;
pub mod context;
pub mod error;
pub mod exit;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod timestamp;

pub use appender::{Appender, SharedAppender};
pub use config::Config;
pub use context::Context;
pub use error::{LoggerError, Result};
pub use exit::{Exit, FATAL_EXIT_CODE};
pub use field::{args_to_fields, pairs, FieldValue, Fields};
pub use log_level::{severity_label, Level};
pub use logger::{Concat, Logger, PrintfLogger};
pub use output_format::OutputFormat;
pub use timestamp::TimestampFormat;
