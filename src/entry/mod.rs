//! Entry-chaining engine
//!
//! A root [`EntryLogger`] owns the sink; immutable [`Entry`] values carry
//! accumulated fields and emit records through it.

pub mod adapter;
pub mod entry;
pub mod formatter;
pub mod logger;

pub use adapter::{app_identity, EntryAdapter, APP_KEY};
pub use entry::{Entry, ERROR_KEY};
pub use formatter::{EntryRecord, Formatter, JsonFormatter, TextFormatter};
pub use logger::{EntryLogger, EntryLoggerBuilder};
