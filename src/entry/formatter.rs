//! Formatters for the entry-chaining engine
//!
//! Base fields (the application identity) always render at the top level.
//! Entry data renders at the top level too unless the JSON formatter has a
//! `data_key`, in which case it nests under that key.

use crate::core::output_format::{escape_key, escape_value, quote_value};
use crate::core::{Fields, Level, Result, TimestampFormat};
use chrono::{DateTime, Utc};
use std::panic::Location;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MSG_KEY: &str = "msg";
pub const FILE_KEY: &str = "file";

/// Everything a formatter needs to render one entry.
#[derive(Debug)]
pub struct EntryRecord<'a> {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: &'a str,
    pub base: &'a Fields,
    pub data: &'a Fields,
    pub caller: Option<&'static Location<'static>>,
}

#[derive(Debug, Clone)]
pub enum Formatter {
    Text(TextFormatter),
    Json(JsonFormatter),
}

impl Formatter {
    pub fn format(&self, record: &EntryRecord<'_>) -> Result<String> {
        match self {
            Formatter::Text(text) => Ok(text.format(record)),
            Formatter::Json(json) => json.format(record),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Text(TextFormatter::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    /// Nest entry data under this key
    pub data_key: Option<String>,
    pub timestamp_format: TimestampFormat,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self {
            data_key: Some("data".to_string()),
            timestamp_format: TimestampFormat::Rfc3339Nano,
        }
    }
}

impl JsonFormatter {
    pub fn format(&self, record: &EntryRecord<'_>) -> Result<String> {
        let mut obj = serde_json::Map::new();

        for (key, value) in record.base {
            obj.insert(key.clone(), value.to_json_value());
        }

        match &self.data_key {
            Some(data_key) if !record.data.is_empty() => {
                let data: serde_json::Map<String, serde_json::Value> = record
                    .data
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect();
                obj.insert(data_key.clone(), serde_json::Value::Object(data));
            }
            Some(_) => {}
            None => {
                for (key, value) in merge_fields(record.base, record.data) {
                    obj.insert(key, value.to_json_value());
                }
            }
        }

        obj.insert(
            TIME_KEY.to_string(),
            serde_json::Value::String(self.timestamp_format.format(&record.time)),
        );
        obj.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        obj.insert(
            MSG_KEY.to_string(),
            serde_json::Value::String(record.message.to_string()),
        );
        if let Some(caller) = record.caller {
            obj.insert(
                FILE_KEY.to_string(),
                serde_json::Value::String(format!("{}:{}", caller.file(), caller.line())),
            );
        }

        Ok(serde_json::to_string(&serde_json::Value::Object(obj))?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatter {
    /// Colour the level label (needs the `console` feature)
    pub colors: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            colors: false,
            timestamp_format: TimestampFormat::Rfc3339,
        }
    }
}

impl TextFormatter {
    pub fn format(&self, record: &EntryRecord<'_>) -> String {
        let mut parts = vec![
            format!(
                "{}={}",
                TIME_KEY,
                quote_value(&self.timestamp_format.format(&record.time))
            ),
            format!("{}={}", LEVEL_KEY, self.level_label(record.level)),
            format!("{}={}", MSG_KEY, escape_value(record.message)),
        ];

        if let Some(caller) = record.caller {
            parts.push(format!(
                "{}={}",
                FILE_KEY,
                escape_value(&format!("{}:{}", caller.file(), caller.line()))
            ));
        }

        for (key, value) in merge_fields(record.base, record.data) {
            parts.push(format!(
                "{}={}",
                escape_key(&key),
                escape_value(&value.to_string())
            ));
        }

        parts.join(" ")
    }

    fn level_label(&self, level: Level) -> String {
        #[cfg(feature = "console")]
        if self.colors {
            use colored::Colorize;
            return level.to_str().color(level.color_code()).to_string();
        }
        level.to_str().to_string()
    }
}

fn is_reserved(key: &str) -> bool {
    matches!(key, TIME_KEY | LEVEL_KEY | MSG_KEY | FILE_KEY)
}

/// Base and data fields as one sorted map. Data keys that clash with a
/// fixed record key or a base field move under `fields.`.
fn merge_fields(base: &Fields, data: &Fields) -> Fields {
    let mut merged: Fields = base
        .iter()
        .map(|(k, v)| {
            let key = if is_reserved(k) {
                format!("fields.{}", k)
            } else {
                k.clone()
            };
            (key, v.clone())
        })
        .collect();
    for (key, value) in data {
        let key = if is_reserved(key) || base.contains_key(key) {
            format!("fields.{}", key)
        } else {
            key.clone()
        };
        merged.insert(key, value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    fn app_fields() -> Fields {
        let mut app = Fields::new();
        app.insert("host".into(), "web-1".into());
        app.insert("version".into(), "1.2.3".into());
        let mut base = Fields::new();
        base.insert("app".into(), FieldValue::Map(app));
        base
    }

    #[test]
    fn test_json_nests_data_and_keeps_app_top_level() {
        let base = app_fields();
        let mut data = Fields::new();
        data.insert("user".into(), "alice".into());

        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Info,
            message: "hello",
            base: &base,
            data: &data,
            caller: None,
        };
        let line = JsonFormatter::default().format(&record).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["msg"], "hello");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["app"]["host"], "web-1");
        assert_eq!(parsed["data"]["user"], "alice");
        assert_eq!(parsed["time"], "2025-01-08T10:30:45.000000000Z");
    }

    #[test]
    fn test_json_omits_empty_data() {
        let base = app_fields();
        let data = Fields::new();
        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Trace,
            message: "m",
            base: &base,
            data: &data,
            caller: None,
        };
        let line = JsonFormatter::default().format(&record).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(parsed.get("data").is_none());
    }

    #[test]
    fn test_json_flat_data_prefixes_reserved_keys() {
        let base = Fields::new();
        let mut data = Fields::new();
        data.insert("msg".into(), "shadow".into());
        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Warn,
            message: "real",
            base: &base,
            data: &data,
            caller: None,
        };
        let formatter = JsonFormatter {
            data_key: None,
            ..JsonFormatter::default()
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&formatter.format(&record).unwrap()).unwrap();
        assert_eq!(parsed["msg"], "real");
        assert_eq!(parsed["fields.msg"], "shadow");
    }

    #[test]
    fn test_text_format() {
        let base = app_fields();
        let mut data = Fields::new();
        data.insert("attempt".into(), 3.into());
        data.insert("error".into(), "disk full".into());

        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Error,
            message: "write failed",
            base: &base,
            data: &data,
            caller: None,
        };
        let line = TextFormatter::default().format(&record);

        assert_eq!(
            line,
            "time=\"2025-01-08T10:30:45Z\" level=ERROR msg=\"write failed\" \
             app=\"map[host:web-1 version:1.2.3]\" attempt=3 error=\"disk full\""
        );
    }

    #[test]
    fn test_text_keys_sorted_across_base_and_data() {
        let mut base = Fields::new();
        base.insert("service".into(), "api".into());
        let mut data = Fields::new();
        data.insert("attempt".into(), 1.into());
        data.insert("zone".into(), "eu".into());

        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Info,
            message: "m",
            base: &base,
            data: &data,
            caller: None,
        };
        let line = TextFormatter::default().format(&record);
        assert!(line.ends_with("msg=m attempt=1 service=api zone=eu"), "{line}");
    }

    #[test]
    fn test_data_key_clashing_with_base_is_prefixed() {
        let base = app_fields();
        let mut data = Fields::new();
        data.insert("app".into(), "mine".into());

        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Info,
            message: "m",
            base: &base,
            data: &data,
            caller: None,
        };
        let line = TextFormatter::default().format(&record);
        assert_eq!(line.matches(" app=").count(), 1, "{line}");
        assert!(line.contains(" fields.app=mine"), "{line}");

        let flat = JsonFormatter {
            data_key: None,
            ..JsonFormatter::default()
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&flat.format(&record).unwrap()).unwrap();
        assert_eq!(parsed["app"]["host"], "web-1");
        assert_eq!(parsed["fields.app"], "mine");
    }

    #[test]
    fn test_text_caller() {
        let base = Fields::new();
        let data = Fields::new();
        let record = EntryRecord {
            time: fixed_time(),
            level: Level::Debug,
            message: "here",
            base: &base,
            data: &data,
            caller: Some(Location::caller()),
        };
        let line = TextFormatter::default().format(&record);
        assert!(line.contains("file=src/entry/formatter.rs:"), "{line}");
    }
}
