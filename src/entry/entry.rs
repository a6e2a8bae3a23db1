//! Immutable, chainable log entries
//!
//! Every `with_*` call returns a new `Entry` holding its own copy of the
//! field map. The receiver is never changed, so entries derived from one
//! parent on different threads cannot see each other's fields.

use super::formatter::EntryRecord;
use super::logger::EntryLogger;
use crate::core::{FieldValue, Fields, Level, FATAL_EXIT_CODE};
use chrono::Utc;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Key under which `with_error` stores the error text.
pub const ERROR_KEY: &str = "error";

#[derive(Debug, Clone)]
pub struct Entry {
    logger: Arc<EntryLogger>,
    data: Arc<Fields>,
}

impl Entry {
    pub(crate) fn new(logger: Arc<EntryLogger>) -> Self {
        Self {
            logger,
            data: Arc::new(Fields::new()),
        }
    }

    pub fn logger(&self) -> &Arc<EntryLogger> {
        &self.logger
    }

    pub fn data(&self) -> &Fields {
        &self.data
    }

    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_fields([(key.into(), value.into())])
    }

    #[must_use]
    pub fn with_fields<I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, FieldValue)>,
    {
        let mut data = Fields::clone(&self.data);
        data.extend(fields);
        self.derive(data)
    }

    /// Attach `fields` as one map-valued field named `group`.
    ///
    /// A group already present as a map is extended rather than replaced.
    #[must_use]
    pub fn with_group(&self, group: &str, fields: Fields) -> Self {
        let mut data = Fields::clone(&self.data);
        let merged = match data.remove(group) {
            Some(FieldValue::Map(mut existing)) => {
                existing.extend(fields);
                existing
            }
            _ => fields,
        };
        data.insert(group.to_string(), FieldValue::Map(merged));
        self.derive(data)
    }

    #[must_use]
    pub fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Self {
        self.with_field(ERROR_KEY, err.to_string())
    }

    fn derive(&self, data: Fields) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
            data: Arc::new(data),
        }
    }

    /// Emit at `level` if enabled, tagging the record with `caller` when
    /// the engine reports callers.
    pub fn log_at<M: fmt::Display + ?Sized>(
        &self,
        level: Level,
        msg: &M,
        caller: Option<&'static Location<'static>>,
    ) {
        if !self.logger.is_level_enabled(level) {
            return;
        }

        let message = msg.to_string();
        let record = EntryRecord {
            time: Utc::now(),
            level,
            message: &message,
            base: self.logger.base_fields(),
            data: &self.data,
            caller: caller.filter(|_| self.logger.report_caller()),
        };
        self.logger.write(&record);
    }

    #[track_caller]
    pub fn log<M: fmt::Display>(&self, level: Level, msg: M) {
        self.log_at(level, &msg, Some(Location::caller()));
    }

    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_at(level, &args, Some(Location::caller()));
    }

    #[track_caller]
    pub fn trace<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Trace, msg);
    }

    #[track_caller]
    pub fn debug<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warn<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Warn, msg);
    }

    #[track_caller]
    pub fn error<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Error, msg);
    }

    /// Emit at `Fatal`, flush, then run the engine's exit effect.
    #[track_caller]
    pub fn fatal<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Fatal, msg);
        self.logger.flush();
        self.logger.exit_handler().call(FATAL_EXIT_CODE);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    /// Same as `infof`.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }
}
