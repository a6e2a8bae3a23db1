//! Forwards records from the record engine into the entry-chaining engine
//!
//! The four shared levels map one to one; `Trace` and `Fatal` have no
//! counterpart on the record side of this bridge and arrive as `Trace`.
//! A group does not nest: it attaches a single `group` field holding the
//! group name, so nested structure is flattened on the way through.

use crate::core::{Config, Context, Exit, Fields, Level, Result, SharedAppender};
use crate::entry::{Entry, EntryAdapter};
use crate::record::{Attr, Handler, Record};
use std::sync::Arc;

/// Field attached by `with_group`.
pub const GROUP_KEY: &str = "group";

#[derive(Debug, Clone)]
pub struct EntryHandler {
    entry: Entry,
}

impl EntryHandler {
    pub fn new(entry: Entry) -> Self {
        Self { entry }
    }

    /// An entry engine configured from `config`, carrying the `app`
    /// identity, writing to `appender`.
    pub fn from_parts(config: &Config, appender: SharedAppender, exit: Exit) -> Self {
        Self::new(EntryAdapter::from_parts(config, appender, exit).entry().clone())
    }

    /// Same as [`from_parts`](Self::from_parts) but writing to standard
    /// error and terminating the process on exit.
    pub fn from_config(config: &Config) -> Self {
        Self::new(EntryAdapter::from_config(config).entry().clone())
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }
}

/// Map a record level onto the entry engine.
pub fn map_level(level: Level) -> Level {
    if level.is_base() {
        level
    } else {
        Level::Trace
    }
}

fn attrs_to_fields(attrs: Vec<Attr>) -> Fields {
    attrs.into_iter().map(|a| (a.key, a.value)).collect()
}

impl Handler for EntryHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        self.entry.logger().is_level_enabled(map_level(level))
    }

    fn handle(&self, _ctx: &Context, record: Record) -> Result<()> {
        self.entry
            .with_fields(attrs_to_fields(record.attrs))
            .log_at(map_level(record.level), &record.message, record.location);
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self::new(self.entry.with_fields(attrs_to_fields(attrs))))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self::new(self.entry.with_field(GROUP_KEY, name)))
    }

    fn flush(&self) -> Result<()> {
        self.entry.logger().flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::BufferAppender;
    use crate::core::Logger;
    use crate::record::{RecordAdapter, RecordLogger};

    fn handler(buffer: &BufferAppender, level: Option<&str>) -> EntryHandler {
        let config = Config {
            json: true,
            level: level.map(str::to_string),
            host: "h".into(),
            version: "v".into(),
            ..Config::default()
        };
        EntryHandler::from_parts(&config, SharedAppender::new(buffer.clone()), Exit::new(|_| {}))
    }

    fn last_json(buffer: &BufferAppender) -> serde_json::Value {
        serde_json::from_str(buffer.lines().last().expect("a line")).unwrap()
    }

    #[test]
    fn test_map_level() {
        assert_eq!(map_level(Level::Debug), Level::Debug);
        assert_eq!(map_level(Level::Info), Level::Info);
        assert_eq!(map_level(Level::Warn), Level::Warn);
        assert_eq!(map_level(Level::Error), Level::Error);
        assert_eq!(map_level(Level::Trace), Level::Trace);
        assert_eq!(map_level(Level::Fatal), Level::Trace);
    }

    #[test]
    fn test_warn_arrives_as_warn_with_attrs() {
        let buffer = BufferAppender::new();
        let logger = RecordLogger::new(Arc::new(handler(&buffer, None)));
        logger.log(
            &Context::background(),
            Level::Warn,
            "disk nearly full",
            &["free_mb".into(), 12.into()],
        );

        let parsed = last_json(&buffer);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["msg"], "disk nearly full");
        assert_eq!(parsed["data"]["free_mb"], 12);
        assert_eq!(parsed["app"]["host"], "h");
    }

    #[test]
    fn test_group_becomes_single_field() {
        let buffer = BufferAppender::new();
        let logger = RecordLogger::new(Arc::new(handler(&buffer, None)))
            .with_group("req")
            .with(&["id".into(), 7.into()]);
        logger.log(&Context::background(), Level::Info, "m", &[]);

        let parsed = last_json(&buffer);
        assert_eq!(parsed["data"]["group"], "req");
        assert_eq!(parsed["data"]["id"], 7);
    }

    #[test]
    fn test_fatal_falls_back_to_trace() {
        let buffer = BufferAppender::new();
        let logger = RecordLogger::new(Arc::new(handler(&buffer, None)));
        logger.log(&Context::background(), Level::Fatal, "odd", &[]);
        assert_eq!(last_json(&buffer)["level"], "TRACE");
    }

    #[test]
    fn test_enabled_follows_entry_level() {
        let buffer = BufferAppender::new();
        let h = handler(&buffer, Some("warn"));
        let ctx = Context::background();
        assert!(!h.enabled(&ctx, Level::Info));
        assert!(h.enabled(&ctx, Level::Error));
        // Fatal maps to Trace, which the entry engine filters here.
        assert!(!h.enabled(&ctx, Level::Fatal));
    }

    #[test]
    fn test_record_adapter_over_entry_handler() {
        let buffer = BufferAppender::new();
        let adapter = RecordAdapter::with_handler(Arc::new(handler(&buffer, None)), Exit::new(|_| {}));
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        adapter.with_error(&err).error("failed");

        let parsed = last_json(&buffer);
        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["data"]["error"], "boom");
    }
}
