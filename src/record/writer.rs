//! Terminal handler that renders records as text or JSON lines
//!
//! Attributes added through `with_attrs` are kept as a pre-built tree so a
//! record only has to merge its own attributes at the currently open group.
//! Duplicate keys resolve last-write-wins; groups left empty are omitted.

use super::handler::{Handler, HandlerOptions};
use super::record::{Attr, Record};
use crate::core::output_format::{escape_key, escape_value, quote_value};
use crate::core::{Context, FieldValue, Fields, Level, OutputFormat, Result, SharedAppender};
use std::sync::Arc;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MSG_KEY: &str = "msg";
pub const SOURCE_KEY: &str = "source";

#[derive(Debug, Clone)]
pub struct WriterHandler {
    format: OutputFormat,
    options: HandlerOptions,
    appender: SharedAppender,
    attrs: Arc<Fields>,
    groups: Arc<Vec<String>>,
}

impl WriterHandler {
    pub fn new(format: OutputFormat, appender: SharedAppender, options: HandlerOptions) -> Self {
        Self {
            format,
            options,
            appender,
            attrs: Arc::new(Fields::new()),
            groups: Arc::new(Vec::new()),
        }
    }

    pub fn json(appender: SharedAppender, options: HandlerOptions) -> Self {
        Self::new(OutputFormat::Json, appender, options)
    }

    pub fn text(appender: SharedAppender, options: HandlerOptions) -> Self {
        Self::new(OutputFormat::Text, appender, options)
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    fn render(&self, record: &Record, tree: &Fields) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.render_json(record, tree),
            OutputFormat::Text => Ok(self.render_text(record, tree)),
        }
    }

    fn render_json(&self, record: &Record, tree: &Fields) -> Result<String> {
        let mut obj: serde_json::Map<String, serde_json::Value> = tree
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json_value()))
            .collect();

        obj.insert(
            TIME_KEY.to_string(),
            serde_json::Value::String(self.options.timestamp_format.format(&record.time)),
        );
        obj.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        obj.insert(
            MSG_KEY.to_string(),
            serde_json::Value::String(record.message.clone()),
        );
        if let Some(location) = record.location.filter(|_| self.options.add_source) {
            obj.insert(
                SOURCE_KEY.to_string(),
                serde_json::json!({ "file": location.file(), "line": location.line() }),
            );
        }

        Ok(serde_json::to_string(&serde_json::Value::Object(obj))?)
    }

    fn render_text(&self, record: &Record, tree: &Fields) -> String {
        let mut parts = vec![
            format!(
                "{}={}",
                TIME_KEY,
                escape_value(&self.options.timestamp_format.format(&record.time))
            ),
            format!("{}={}", LEVEL_KEY, record.level.to_str()),
        ];
        if let Some(location) = record.location.filter(|_| self.options.add_source) {
            parts.push(format!(
                "{}={}:{}",
                SOURCE_KEY,
                location.file(),
                location.line()
            ));
        }
        parts.push(format!("{}={}", MSG_KEY, quote_value(&record.message)));

        flatten_text("", tree, &mut parts);
        parts.join(" ")
    }
}

impl Handler for WriterHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.options.level
    }

    fn handle(&self, _ctx: &Context, record: Record) -> Result<()> {
        let mut tree = Fields::clone(&self.attrs);
        insert_attrs(&mut tree, &self.groups, record.attrs.iter().cloned());
        prune_empty_groups(&mut tree);

        let line = self.render(&record, &tree)?;
        self.appender.write_line(&line);
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut tree = Fields::clone(&self.attrs);
        insert_attrs(&mut tree, &self.groups, attrs);
        Arc::new(Self {
            attrs: Arc::new(tree),
            ..self.clone()
        })
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut groups = Vec::clone(&self.groups);
        if !name.is_empty() {
            groups.push(name.to_string());
        }
        Arc::new(Self {
            groups: Arc::new(groups),
            ..self.clone()
        })
    }

    fn flush(&self) -> Result<()> {
        self.appender.flush();
        Ok(())
    }
}

/// Insert `attrs` into `tree` under the group path `groups`.
fn insert_attrs<I>(tree: &mut Fields, groups: &[String], attrs: I)
where
    I: IntoIterator<Item = Attr>,
{
    let mut target = tree;
    for group in groups {
        let slot = target
            .entry(group.clone())
            .or_insert_with(|| FieldValue::Map(Fields::new()));
        if !matches!(slot, FieldValue::Map(_)) {
            *slot = FieldValue::Map(Fields::new());
        }
        let FieldValue::Map(inner) = slot else {
            return;
        };
        target = inner;
    }

    for attr in attrs {
        merge_attr(target, attr.key, attr.value);
    }
}

/// Last write wins, except that two groups with the same key merge.
/// A group with an empty key is inlined; any other empty key is ignored.
fn merge_attr(target: &mut Fields, key: String, value: FieldValue) {
    match value {
        FieldValue::Map(fields) if key.is_empty() => {
            for (k, v) in fields {
                merge_attr(target, k, v);
            }
        }
        _ if key.is_empty() => {}
        FieldValue::Map(fields) => match target.get_mut(&key) {
            Some(FieldValue::Map(existing)) => {
                for (k, v) in fields {
                    merge_attr(existing, k, v);
                }
            }
            _ => {
                target.insert(key, FieldValue::Map(fields));
            }
        },
        other => {
            target.insert(key, other);
        }
    }
}

fn prune_empty_groups(tree: &mut Fields) {
    tree.retain(|_, value| match value {
        FieldValue::Map(inner) => {
            prune_empty_groups(inner);
            !inner.is_empty()
        }
        _ => true,
    });
}

fn flatten_text(prefix: &str, tree: &Fields, parts: &mut Vec<String>) {
    for (key, value) in tree {
        let full_key = if prefix.is_empty() {
            escape_key(key)
        } else {
            format!("{}.{}", prefix, escape_key(key))
        };
        match value {
            FieldValue::Map(inner) => flatten_text(&full_key, inner, parts),
            other => parts.push(format!("{}={}", full_key, escape_value(&other.to_string()))),
        }
    }
}
