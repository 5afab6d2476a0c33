//! Feed payload decoding
//!
//! The backend answers with a JSON array of event records, or with an empty
//! object/array when there is nothing to show. Individual records are not
//! validated: a missing field stays `None` and is displayed as `undefined`.

use serde_json::Value;

use crate::error::FeedError;

/// Placeholder shown for a record field the backend did not send
pub const MISSING_FIELD: &str = "undefined";

/// One backend-reported malicious-traffic occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventRecord {
    /// Source IP address of the detected traffic
    pub ip: Option<String>,
    /// Label describing the kind of malicious activity
    pub attack_type: Option<String>,
    /// When the backend recorded the event (not displayed)
    pub timestamp: Option<String>,
}

impl EventRecord {
    pub fn ip_text(&self) -> &str {
        self.ip.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn attack_type_text(&self) -> &str {
        self.attack_type.as_deref().unwrap_or(MISSING_FIELD)
    }
}

impl From<&Value> for EventRecord {
    fn from(value: &Value) -> Self {
        Self {
            ip: field_text(value, "ip"),
            attack_type: field_text(value, "attack_type"),
            timestamp: field_text(value, "timestamp"),
        }
    }
}

/// Strings are taken verbatim, any other JSON value as its serialized text.
fn field_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A decoded response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPayload {
    /// `{}` or `[]`: nothing to display this cycle
    Empty,
    /// Records in the order the backend sent them
    Records(Vec<EventRecord>),
}

/// Decode a response body.
///
/// Fails on malformed JSON and on any non-empty value that is not an array.
pub fn parse_payload(body: &str) -> Result<FeedPayload, FeedError> {
    let value: Value = serde_json::from_str(body)?;

    match value {
        Value::Array(items) if items.is_empty() => Ok(FeedPayload::Empty),
        Value::Object(map) if map.is_empty() => Ok(FeedPayload::Empty),
        Value::Array(items) => Ok(FeedPayload::Records(
            items.iter().map(EventRecord::from).collect(),
        )),
        other => Err(FeedError::UnexpectedShape(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
