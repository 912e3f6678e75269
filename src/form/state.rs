// src/form/state.rs

//! The form state store: canonical field key -> current value.
//!
//! One instance exists per active document session. It is the single source
//! of truth the renderer reads; mutation goes through the session ops, and
//! the last write for a given key wins.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

const ABSENT: FieldValue = FieldValue::Absent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// No value yet (image fields start here).
    Absent,
    /// User-entered text; may be empty.
    Text(String),
    /// Uploaded image as a data URI.
    Image(String),
}

impl FieldValue {
    /// True when the value should render as a blank.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) | FieldValue::Image(s) => s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&str> {
        match self {
            FieldValue::Image(s) => Some(s),
            _ => None,
        }
    }

    /// JSON projection used by the request builder: text and images as
    /// strings (empty string included), absent as null.
    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Absent => JsonValue::Null,
            FieldValue::Text(s) | FieldValue::Image(s) => JsonValue::String(s.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for a key; missing keys read as `Absent`.
    pub fn get(&self, key: &str) -> &FieldValue {
        self.values.get(key).unwrap_or(&ABSENT)
    }

    pub fn set(&mut self, key: impl Into<String>, value: FieldValue) {
        self.values.insert(key.into(), value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_absent() {
        let s = FormState::new();
        assert_eq!(*s.get("NOPE"), FieldValue::Absent);
        assert!(s.get("NOPE").is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut s = FormState::new();
        s.set("NAME", FieldValue::Text("first".into()));
        s.set("NAME", FieldValue::Text("second".into()));
        assert_eq!(s.get("NAME").as_text(), Some("second"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn empty_text_is_empty_but_present() {
        let mut s = FormState::new();
        s.set("NAME", FieldValue::Text(String::new()));
        assert!(s.get("NAME").is_empty());
        assert!(s.contains_key("NAME"));
    }

    #[test]
    fn json_projection() {
        assert_eq!(FieldValue::Absent.to_json(), JsonValue::Null);
        assert_eq!(
            FieldValue::Text("x".into()).to_json(),
            JsonValue::String("x".into())
        );
        assert_eq!(
            FieldValue::Image("data:image/png;base64,AA==".into()).to_json(),
            JsonValue::String("data:image/png;base64,AA==".into())
        );
    }
}
