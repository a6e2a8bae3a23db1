//! [`Logger`] adapter over the record/handler engine
//!
//! The default chain is `ContextHandler -> WriterHandler`. Application
//! identity sits in a top-level `app` group and every later attribute nests
//! under `data`, so application fields never collide with record metadata.

use super::handler::{Handler, HandlerOptions};
use super::logger::RecordLogger;
use super::record::Attr;
use super::writer::WriterHandler;
use crate::appenders::ConsoleAppender;
use crate::bridge::ContextHandler;
use crate::core::{
    Config, Context, Exit, FieldValue, Level, Logger, OutputFormat, PrintfLogger,
    SharedAppender, FATAL_EXIT_CODE,
};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

pub const APP_GROUP: &str = "app";
pub const DATA_GROUP: &str = "data";
pub const ERROR_KEY: &str = "error";

#[derive(Debug, Clone)]
pub struct RecordAdapter {
    logger: RecordLogger,
    exit: Exit,
}

impl RecordAdapter {
    /// Build from the process environment, writing to standard error.
    ///
    /// Reads `LOG_JSON`, `LOG_CALLERS`, `LOG_LEVEL` (default `INFO`, offsets
    /// such as `DEBUG-4` accepted), `HOST` and `APP_VERSION` once.
    pub fn new() -> Self {
        Self::from_config(&Config::from_env())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_parts(
            config,
            SharedAppender::new(ConsoleAppender::new()),
            Exit::process(),
        )
    }

    /// Build the default chain against an explicit sink and termination
    /// effect.
    pub fn from_parts(config: &Config, appender: SharedAppender, exit: Exit) -> Self {
        let options = HandlerOptions {
            level: parse_level(config.level.as_deref()),
            add_source: config.callers,
            ..HandlerOptions::default()
        };
        let writer = WriterHandler::new(
            OutputFormat::from_json_flag(config.json),
            appender,
            options,
        );
        let handler: Arc<dyn Handler> = Arc::new(ContextHandler::new(Arc::new(writer)));
        Self::with_identity(handler, config, exit)
    }

    /// Wrap `handler` with the `app` identity group and the `data` namespace.
    pub fn with_identity(handler: Arc<dyn Handler>, config: &Config, exit: Exit) -> Self {
        let logger = RecordLogger::new(handler)
            .with_attrs(vec![Attr::group(
                APP_GROUP,
                [
                    Attr::new("host", config.host.as_str()),
                    Attr::new("version", config.version.as_str()),
                ],
            )])
            .with_group(DATA_GROUP);
        Self { logger, exit }
    }

    /// Drive any handler, e.g. a cross-engine
    /// [`EntryHandler`](crate::bridge::EntryHandler). Carried context
    /// fields are merged in front of it; no identity or group is added.
    pub fn with_handler(handler: Arc<dyn Handler>, exit: Exit) -> Self {
        Self {
            logger: RecordLogger::new(Arc::new(ContextHandler::new(handler))),
            exit,
        }
    }

    pub fn logger(&self) -> &RecordLogger {
        &self.logger
    }

    #[track_caller]
    fn emit<M: fmt::Display + ?Sized>(&self, level: Level, msg: &M) {
        self.logger.log_at(
            &Context::background(),
            level,
            msg,
            &[],
            Some(Location::caller()),
        );
    }
}

impl Default for RecordAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Level names with optional offsets, rounded up to the next level;
/// anything unparsable means `Info`.
fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| Level::parse_with_offset(s).ok())
        .unwrap_or(Level::Info)
}

impl PrintfLogger for RecordAdapter {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, &args);
    }
}

impl Logger for RecordAdapter {
    fn with(&self, group: &str, args: &[FieldValue]) -> Self {
        Self {
            logger: self.logger.with_group(group).with(args),
            exit: self.exit.clone(),
        }
    }

    fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Self {
        Self {
            logger: self
                .logger
                .with_attrs(vec![Attr::new(ERROR_KEY, err.to_string())]),
            exit: self.exit.clone(),
        }
    }

    #[track_caller]
    fn trace<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Trace, &msg);
    }

    #[track_caller]
    fn debug<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Debug, &msg);
    }

    #[track_caller]
    fn info<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Info, &msg);
    }

    #[track_caller]
    fn warn<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Warn, &msg);
    }

    #[track_caller]
    fn error<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Error, &msg);
    }

    #[track_caller]
    fn fatal<M: fmt::Display>(&self, msg: M) {
        self.emit(Level::Fatal, &msg);
        self.logger.flush();
        self.exit.call(FATAL_EXIT_CODE);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, &args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, &args);
    }

    #[track_caller]
    fn log(&self, ctx: &Context, level: Level, msg: &str, args: &[FieldValue]) {
        self.logger
            .log_at(ctx, level, msg, args, Some(Location::caller()));
    }

    fn enabled(&self, level: Level) -> bool {
        self.logger.enabled(&Context::background(), level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::BufferAppender;

    fn adapter(config: &Config) -> (RecordAdapter, BufferAppender) {
        let buffer = BufferAppender::new();
        let adapter = RecordAdapter::from_parts(
            config,
            SharedAppender::new(buffer.clone()),
            Exit::new(|_| {}),
        );
        (adapter, buffer)
    }

    fn json_config() -> Config {
        Config {
            json: true,
            host: "web-1".into(),
            version: "1.2.3".into(),
            ..Config::default()
        }
    }

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_default_level_is_info() {
        let (adapter, buffer) = adapter(&json_config());
        adapter.debug("dropped");
        adapter.trace("dropped");
        adapter.info("kept");
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_offset_level() {
        let config = Config {
            level: Some("DEBUG-4".into()),
            ..json_config()
        };
        let (adapter, _) = adapter(&config);
        assert!(adapter.enabled(Level::Trace));
    }

    #[test]
    fn test_offset_between_levels_is_a_minimum() {
        let cases = [
            ("INFO+2", Level::Info, Level::Warn),
            ("DEBUG-2", Level::Trace, Level::Debug),
            ("ERROR+1", Level::Error, Level::Fatal),
        ];
        for (raw, below, lowest) in cases {
            let config = Config {
                level: Some(raw.into()),
                ..json_config()
            };
            let (adapter, buffer) = adapter(&config);
            assert!(!adapter.enabled(below), "{raw}");
            assert!(adapter.enabled(lowest), "{raw}");

            adapter.log(&Context::background(), below, "dropped", &[]);
            assert!(buffer.is_empty(), "{raw}");
            adapter.log(&Context::background(), lowest, "kept", &[]);
            assert_eq!(buffer.len(), 1, "{raw}");
        }
    }

    #[test]
    fn test_identity_and_data_namespace() {
        let (adapter, buffer) = adapter(&json_config());
        adapter.with("", &["user".into(), "alice".into()]).info("hello");

        let parsed = parse(&buffer.lines()[0]);
        assert_eq!(parsed["msg"], "hello");
        assert_eq!(parsed["app"]["host"], "web-1");
        assert_eq!(parsed["app"]["version"], "1.2.3");
        assert_eq!(parsed["data"]["user"], "alice");
    }

    #[test]
    fn test_grouped_with_nests_under_data() {
        let (adapter, buffer) = adapter(&json_config());
        adapter.with("req", &["id".into(), 7.into()]).info("grouped");

        let parsed = parse(&buffer.lines()[0]);
        assert_eq!(parsed["data"]["req"]["id"], 7);
    }

    #[test]
    fn test_fatal_and_trace_labels() {
        let config = Config {
            level: Some("TRACE".into()),
            ..json_config()
        };
        let (adapter, buffer) = adapter(&config);
        adapter.trace("t");
        adapter.fatal("f");

        let lines = buffer.lines();
        assert_eq!(parse(&lines[0])["level"], "TRACE");
        assert_eq!(parse(&lines[1])["level"], "FATAL");
    }

    #[test]
    fn test_log_merges_context_through_handler() {
        let (adapter, buffer) = adapter(&json_config());
        let ctx = Context::background().with_field("request_id", "r-9");
        adapter.log(&ctx, Level::Warn, "ctx", &["attempt".into(), 2.into()]);

        let parsed = parse(&buffer.lines()[0]);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["data"]["request_id"], "r-9");
        assert_eq!(parsed["data"]["attempt"], 2);
    }

    #[test]
    fn test_infof_formats() {
        let (adapter, buffer) = adapter(&json_config());
        adapter.infof(format_args!("{}-{}", "a", 1));
        adapter.printf(format_args!("p{}", 2));
        let lines = buffer.lines();
        assert_eq!(parse(&lines[0])["msg"], "a-1");
        assert_eq!(parse(&lines[1])["msg"], "p2");
        assert_eq!(parse(&lines[1])["level"], "INFO");
    }
}
