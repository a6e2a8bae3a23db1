//! Records and attributes of the record/handler engine

use crate::core::{pairs, FieldValue, Fields, Level};
use chrono::{DateTime, Utc};
use std::panic::Location;

/// One key/value attribute. A map value is a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: FieldValue,
}

impl Attr {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A group attribute nesting `attrs` under `name`.
    pub fn group<K, I>(name: K, attrs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = Attr>,
    {
        let fields: Fields = attrs.into_iter().map(|a| (a.key, a.value)).collect();
        Self {
            key: name.into(),
            value: FieldValue::Map(fields),
        }
    }

    /// Fold `key, value, ...` arguments into attributes (see [`pairs`]).
    pub fn from_args(args: &[FieldValue]) -> Vec<Attr> {
        pairs(args)
            .into_iter()
            .map(|(key, value)| Attr { key, value })
            .collect()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.value, FieldValue::Map(_))
    }
}

/// One log event on its way to a handler.
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub location: Option<&'static Location<'static>>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: Option<&'static Location<'static>>) -> Self {
        self.location = location;
        self
    }

    pub fn add_attrs<I: IntoIterator<Item = Attr>>(&mut self, attrs: I) {
        self.attrs.extend(attrs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_attr() {
        let attr = Attr::group("app", [Attr::new("host", "web-1"), Attr::new("version", "1")]);
        assert!(attr.is_group());
        let map = attr.value.as_map().unwrap();
        assert_eq!(map["host"], FieldValue::from("web-1"));
    }

    #[test]
    fn test_from_args_drops_dangling() {
        let attrs = Attr::from_args(&["a".into(), 1.into(), "b".into()]);
        assert_eq!(attrs, vec![Attr::new("a", 1)]);
    }

    #[test]
    fn test_record_attrs() {
        let mut record = Record::new(Level::Warn, "careful");
        record.add_attrs([Attr::new("k", "v")]);
        assert_eq!(record.attrs.len(), 1);
        assert!(record.location.is_none());
    }
}
