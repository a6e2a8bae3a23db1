//! Front end of the record/handler engine

use super::handler::Handler;
use super::record::{Attr, Record};
use crate::core::{Context, FieldValue, Level};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Builds records and hands them to a handler chain.
///
/// Cloning is cheap; derived loggers get their own handler.
#[derive(Clone)]
pub struct RecordLogger {
    handler: Arc<dyn Handler>,
}

impl RecordLogger {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Attach `key, value` pairs (see [`Attr::from_args`]).
    #[must_use]
    pub fn with(&self, args: &[FieldValue]) -> Self {
        self.with_attrs(Attr::from_args(args))
    }

    #[must_use]
    pub fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    /// Nest every later attribute under `name`; an empty name is a no-op.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_group(name),
        }
    }

    pub fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.handler.enabled(ctx, level)
    }

    /// Emit if enabled. The message is only rendered after the level check.
    pub fn log_at<M: fmt::Display + ?Sized>(
        &self,
        ctx: &Context,
        level: Level,
        msg: &M,
        args: &[FieldValue],
        location: Option<&'static Location<'static>>,
    ) {
        if !self.enabled(ctx, level) {
            return;
        }
        let mut record = Record::new(level, msg.to_string()).with_location(location);
        record.add_attrs(Attr::from_args(args));
        self.dispatch(ctx, record);
    }

    /// Emit a record carrying ready-made attributes.
    pub fn log_attrs(
        &self,
        ctx: &Context,
        level: Level,
        msg: &str,
        attrs: Vec<Attr>,
        location: Option<&'static Location<'static>>,
    ) {
        if !self.enabled(ctx, level) {
            return;
        }
        let mut record = Record::new(level, msg).with_location(location);
        record.add_attrs(attrs);
        self.dispatch(ctx, record);
    }

    #[track_caller]
    pub fn log(&self, ctx: &Context, level: Level, msg: &str, args: &[FieldValue]) {
        self.log_at(ctx, level, msg, args, Some(Location::caller()));
    }

    pub fn flush(&self) {
        if let Err(e) = self.handler.flush() {
            eprintln!("[LOGGER ERROR] Handler flush failed: {}", e);
        }
    }

    fn dispatch(&self, ctx: &Context, record: Record) {
        if let Err(e) = self.handler.handle(ctx, record) {
            eprintln!("[LOGGER ERROR] Handler failed: {}", e);
        }
    }
}

impl fmt::Debug for RecordLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordLogger").finish_non_exhaustive()
    }
}
