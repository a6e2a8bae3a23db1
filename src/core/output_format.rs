//! Output format selection and text escaping shared by both engines
//!
//! - `OutputFormat::Text`: `key=value` pairs on one line
//! - `OutputFormat::Json`: one JSON object per line

/// Output format for records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable `key=value` format (default)
    ///
    /// Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed"`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"level":"INFO","msg":"Request processed","time":"2025-01-08T10:30:45.123Z"}`
    Json,
}

impl OutputFormat {
    /// `Json` when `json` is set, `Text` otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Escape a key (drop spaces and special chars)
///
/// A key made only of special chars is kept whole, quoted.
pub fn escape_key(key: &str) -> String {
    let escaped: String = key
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    if escaped.is_empty() {
        quote_value(key)
    } else {
        escaped
    }
}

/// Quote a value only when it would otherwise be ambiguous.
pub fn escape_value(value: &str) -> String {
    if needs_quoting(value) {
        quote_value(value)
    } else {
        value.to_string()
    }
}

/// Always quote, escaping backslashes, quotes and line breaks.
pub fn quote_value(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '='))
}
