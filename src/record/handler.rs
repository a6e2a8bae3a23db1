//! Handler trait: the extensibility point of the record engine
//!
//! A handler decides whether a level is enabled, turns records into output
//! (or forwards them), and derives new handlers that carry extra attributes
//! or an open group. Handlers are immutable and shared as `Arc<dyn Handler>`.

use super::record::{Attr, Record};
use crate::core::{Context, Level, Result, TimestampFormat};
use std::sync::Arc;

pub trait Handler: Send + Sync {
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    fn handle(&self, ctx: &Context, record: Record) -> Result<()>;

    /// A handler whose records also carry `attrs`, placed under any group
    /// opened so far.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    /// A handler that nests every later attribute under `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Minimum level; records below it are dropped
    pub level: Level,
    /// Add the call site as a `source` attribute
    pub add_source: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            level: Level::Trace,
            add_source: false,
            timestamp_format: TimestampFormat::Iso8601,
        }
    }
}
