//! # Rust Logging Facade
//!
//! One logging contract, two structurally different engines.
//!
//! ## Features
//!
//! - **One Contract**: [`Logger`] covers leveled, formatted, field-attaching
//!   and context-aware calls
//! - **Entry Engine**: immutable, chainable entries ([`EntryAdapter`])
//! - **Record Engine**: pluggable handler chains ([`RecordAdapter`])
//! - **Context Carrier**: fields ride along an explicit [`Context`] and are
//!   merged into records at emission time
//! - **Thread Safe**: derived loggers and contexts never share mutable state
//!
//! ## Example
//!
//! ```
//! use rust_logging_facade::prelude::*;
//! use rust_logging_facade::{fields, info};
//!
//! fn handle_request<L: Logger>(log: &L) {
//!     let log = log.with("", &fields!["route", "/login"]);
//!     info!(log, "request took ", 12, "ms");
//! }
//!
//! let buffer = BufferAppender::new();
//! let log = EntryAdapter::from_parts(
//!     &Config::default(),
//!     SharedAppender::new(buffer.clone()),
//!     Exit::new(|_| {}),
//! );
//! handle_request(&log);
//! assert!(buffer.contents().contains("route=/login"));
//! ```

pub mod appenders;
pub mod bridge;
pub mod core;
pub mod entry;
pub mod macros;
pub mod record;

pub mod prelude {
    pub use crate::appenders::{BufferAppender, ConsoleAppender};
    pub use crate::bridge::{ContextHandler, EntryHandler};
    pub use crate::core::{
        Appender, Config, Context, Exit, FieldValue, Fields, Level, Logger, LoggerError,
        PrintfLogger, Result, SharedAppender,
    };
    pub use crate::entry::EntryAdapter;
    pub use crate::record::{Handler, RecordAdapter};
}

pub use appenders::{BufferAppender, ConsoleAppender};
pub use core::{
    Appender, Config, Context, Exit, FieldValue, Fields, Level, Logger, LoggerError,
    PrintfLogger, Result, SharedAppender,
};
pub use entry::EntryAdapter;
pub use record::RecordAdapter;
