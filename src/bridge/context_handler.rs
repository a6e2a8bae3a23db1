//! Merges carried context fields into each record
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_logging_facade::appenders::BufferAppender;
//! use rust_logging_facade::bridge::ContextHandler;
//! use rust_logging_facade::core::{Context, Level, SharedAppender};
//! use rust_logging_facade::record::{HandlerOptions, RecordLogger, WriterHandler};
//!
//! let buffer = BufferAppender::new();
//! let writer = WriterHandler::text(SharedAppender::new(buffer.clone()), HandlerOptions::default());
//! let logger = RecordLogger::new(Arc::new(ContextHandler::new(Arc::new(writer))));
//!
//! let ctx = Context::background().with_field("request_id", "abc");
//! logger.log(&ctx, Level::Info, "handled", &[]);
//! assert!(buffer.contents().contains("request_id=abc"));
//! ```

use crate::core::{Context, Level, Result};
use crate::record::{Attr, Handler, Record};
use std::sync::Arc;

pub struct ContextHandler {
    next: Arc<dyn Handler>,
}

impl ContextHandler {
    pub fn new(next: Arc<dyn Handler>) -> Self {
        Self { next }
    }
}

impl Handler for ContextHandler {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.next.enabled(ctx, level)
    }

    /// Appends each carried pair as a record attribute. A record attribute
    /// with the same key is replaced, so the carried value wins.
    fn handle(&self, ctx: &Context, mut record: Record) -> Result<()> {
        for (key, value) in ctx.fields() {
            record.attrs.retain(|attr| attr.key != key);
            record.attrs.push(Attr { key, value });
        }
        self.next.handle(ctx, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(ContextHandler::new(self.next.with_attrs(attrs)))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(ContextHandler::new(self.next.with_group(name)))
    }

    fn flush(&self) -> Result<()> {
        self.next.flush()
    }
}
