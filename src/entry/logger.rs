//! Root of the entry-chaining engine
//!
//! An `EntryLogger` owns the sink, the formatter and the minimum level.
//! All derived [`Entry`] values point back at it through an `Arc`.

use super::entry::Entry;
use super::formatter::{EntryRecord, Formatter};
use crate::appenders::ConsoleAppender;
use crate::core::{Appender, Exit, FieldValue, Fields, Level, SharedAppender};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct EntryLogger {
    min_level: RwLock<Level>,
    formatter: Formatter,
    report_caller: bool,
    base_fields: Fields,
    appender: SharedAppender,
    exit: Exit,
}

impl EntryLogger {
    pub fn builder() -> EntryLoggerBuilder {
        EntryLoggerBuilder::new()
    }

    /// A fresh entry with no data of its own.
    pub fn root(self: &Arc<Self>) -> Entry {
        Entry::new(Arc::clone(self))
    }

    pub fn level(&self) -> Level {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.min_level.write() = level;
    }

    pub fn is_level_enabled(&self, level: Level) -> bool {
        level >= *self.min_level.read()
    }

    pub fn report_caller(&self) -> bool {
        self.report_caller
    }

    /// Fields rendered at the top level of every record.
    pub fn base_fields(&self) -> &Fields {
        &self.base_fields
    }

    pub fn exit_handler(&self) -> &Exit {
        &self.exit
    }

    /// Format and write one record; failures are reported and swallowed.
    pub(crate) fn write(&self, record: &EntryRecord<'_>) {
        match self.formatter.format(record) {
            Ok(line) => {
                self.appender.write_line(&line);
            }
            Err(e) => eprintln!("[LOGGER ERROR] Failed to format entry: {}", e),
        }
    }

    pub fn flush(&self) {
        self.appender.flush();
    }
}

impl std::fmt::Debug for EntryLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryLogger")
            .field("min_level", &self.level())
            .field("formatter", &self.formatter)
            .field("report_caller", &self.report_caller)
            .field("base_fields", &self.base_fields)
            .field("appender", &self.appender)
            .finish()
    }
}

/// Builder for [`EntryLogger`]
///
/// # Example
///
/// ```
/// use rust_logging_facade::appenders::BufferAppender;
/// use rust_logging_facade::entry::EntryLogger;
/// use rust_logging_facade::Level;
///
/// let buffer = BufferAppender::new();
/// let logger = EntryLogger::builder()
///     .min_level(Level::Debug)
///     .base_field("service", "api")
///     .appender(buffer.clone())
///     .build();
///
/// logger.root().with_field("user", "alice").info("signed in");
/// assert!(buffer.contents().contains("user=alice"));
/// ```
pub struct EntryLoggerBuilder {
    min_level: Level,
    formatter: Formatter,
    report_caller: bool,
    base_fields: Fields,
    appender: Option<SharedAppender>,
    exit: Exit,
}

impl EntryLoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: Level::Trace,
            formatter: Formatter::default(),
            report_caller: false,
            base_fields: Fields::new(),
            appender: None,
            exit: Exit::process(),
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn report_caller(mut self, report: bool) -> Self {
        self.report_caller = report;
        self
    }

    #[must_use]
    pub fn base_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.base_fields.insert(key.into(), value.into());
        self
    }

    /// Write to `appender` instead of standard error.
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(SharedAppender::new(appender));
        self
    }

    #[must_use]
    pub fn shared_appender(mut self, appender: SharedAppender) -> Self {
        self.appender = Some(appender);
        self
    }

    #[must_use]
    pub fn exit(mut self, exit: Exit) -> Self {
        self.exit = exit;
        self
    }

    pub fn build(self) -> Arc<EntryLogger> {
        Arc::new(EntryLogger {
            min_level: RwLock::new(self.min_level),
            formatter: self.formatter,
            report_caller: self.report_caller,
            base_fields: self.base_fields,
            appender: self
                .appender
                .unwrap_or_else(|| SharedAppender::new(ConsoleAppender::new())),
            exit: self.exit,
        })
    }
}

impl Default for EntryLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
