//! Appender implementations

pub mod buffer;
pub mod console;

pub use buffer::BufferAppender;
pub use console::ConsoleAppender;

pub use crate::core::Appender;
