//! [`Logger`] adapter over the entry-chaining engine
//!
//! Each derived adapter wraps a new [`Entry`]. Grouped pairs fold into one
//! map-valued field named after the group; ungrouped pairs attach one by
//! one.

use super::entry::Entry;
use super::formatter::{Formatter, JsonFormatter, TextFormatter};
use super::logger::EntryLogger;
use crate::appenders::ConsoleAppender;
use crate::core::{
    args_to_fields, pairs, Config, Context, Exit, FieldValue, Fields, Level, Logger,
    OutputFormat, PrintfLogger, SharedAppender,
};
use std::fmt;
use std::panic::Location;

/// Key of the application identity field.
pub const APP_KEY: &str = "app";

#[derive(Debug, Clone)]
pub struct EntryAdapter {
    entry: Entry,
}

impl EntryAdapter {
    /// Build from the process environment, writing to standard error.
    ///
    /// Reads `LOG_JSON`, `LOG_CALLERS`, `LOG_LEVEL` (default `trace`),
    /// `HOST` and `APP_VERSION` once.
    pub fn new() -> Self {
        Self::from_config(&Config::from_env())
    }

    pub fn from_config(config: &Config) -> Self {
        let colors = !config.json && ConsoleAppender::is_terminal();
        Self::build(
            config,
            SharedAppender::new(ConsoleAppender::new()),
            Exit::process(),
            colors,
        )
    }

    /// Build against an explicit sink and termination effect.
    pub fn from_parts(config: &Config, appender: SharedAppender, exit: Exit) -> Self {
        Self::build(config, appender, exit, false)
    }

    fn build(config: &Config, appender: SharedAppender, exit: Exit, colors: bool) -> Self {
        let formatter = match OutputFormat::from_json_flag(config.json) {
            OutputFormat::Json => Formatter::Json(JsonFormatter::default()),
            OutputFormat::Text => Formatter::Text(TextFormatter {
                colors,
                ..TextFormatter::default()
            }),
        };

        let logger = EntryLogger::builder()
            .min_level(parse_level(config.level.as_deref()))
            .formatter(formatter)
            .report_caller(config.callers)
            .base_field(APP_KEY, app_identity(config))
            .shared_appender(appender)
            .exit(exit)
            .build();

        Self {
            entry: logger.root(),
        }
    }

    pub fn from_entry(entry: Entry) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Fields attached through `with` / `with_error`.
    pub fn fields(&self) -> &Fields {
        self.entry.data()
    }
}

impl Default for EntryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// `{host, version}` as a single map value.
pub fn app_identity(config: &Config) -> FieldValue {
    let mut app = Fields::new();
    app.insert("host".to_string(), config.host.clone().into());
    app.insert("version".to_string(), config.version.clone().into());
    FieldValue::Map(app)
}

/// Level names are case-insensitive; anything unparsable means `Trace`.
fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.parse().ok()).unwrap_or(Level::Trace)
}

impl PrintfLogger for EntryAdapter {
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.entry.printf(args);
    }
}

impl Logger for EntryAdapter {
    fn with(&self, group: &str, args: &[FieldValue]) -> Self {
        let entry = if group.is_empty() {
            self.entry.with_fields(pairs(args))
        } else {
            self.entry.with_group(group, args_to_fields(args))
        };
        Self { entry }
    }

    fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Self {
        Self {
            entry: self.entry.with_error(err),
        }
    }

    #[track_caller]
    fn trace<M: fmt::Display>(&self, msg: M) {
        self.entry.trace(msg);
    }

    #[track_caller]
    fn debug<M: fmt::Display>(&self, msg: M) {
        self.entry.debug(msg);
    }

    #[track_caller]
    fn info<M: fmt::Display>(&self, msg: M) {
        self.entry.info(msg);
    }

    #[track_caller]
    fn warn<M: fmt::Display>(&self, msg: M) {
        self.entry.warn(msg);
    }

    #[track_caller]
    fn error<M: fmt::Display>(&self, msg: M) {
        self.entry.error(msg);
    }

    #[track_caller]
    fn fatal<M: fmt::Display>(&self, msg: M) {
        self.entry.fatal(msg);
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.entry.debugf(args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.entry.infof(args);
    }

    #[track_caller]
    fn log(&self, ctx: &Context, level: Level, msg: &str, args: &[FieldValue]) {
        if !self.enabled(level) {
            return;
        }
        // Carried fields go last so they win over same-named arguments.
        self.entry
            .with_fields(pairs(args))
            .with_fields(ctx.fields())
            .log_at(level, msg, Some(Location::caller()));
    }

    fn enabled(&self, level: Level) -> bool {
        self.entry.logger().is_level_enabled(level)
    }
}
