//! Generated value representations.

use crate::formats::ReturnKind;
use serde::{Deserialize, Serialize};

/// Output of the string generator: text, or raw bytes for binary formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl StringValue {
    /// Length as the length constraints count it: Unicode scalar values for
    /// text, bytes for binary data.
    pub fn len(&self) -> usize {
        match self {
            StringValue::Text(text) => text.chars().count(),
            StringValue::Bytes(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ReturnKind {
        match self {
            StringValue::Text(_) => ReturnKind::Text,
            StringValue::Bytes(_) => ReturnKind::Bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StringValue::Text(text) => Some(text),
            StringValue::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StringValue::Text(text) => text.as_bytes(),
            StringValue::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for StringValue {
    fn from(text: String) -> Self {
        StringValue::Text(text)
    }
}

impl From<Vec<u8>> for StringValue {
    fn from(bytes: Vec<u8>) -> Self {
        StringValue::Bytes(bytes)
    }
}

/// Any value the generator can produce for a scalar schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    /// `type: integer`
    Integer(i64),
    /// `type: number`
    Number(f64),
    /// `type: string`
    Text(String),
    /// `type: string` with a binary format
    Bytes(Vec<u8>),
}

impl GeneratedValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// JSON rendering; bytes become a (lossy) UTF-8 string.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            GeneratedValue::Integer(value) => serde_json::Value::from(*value),
            GeneratedValue::Number(value) => serde_json::Value::from(*value),
            GeneratedValue::Text(text) => serde_json::Value::from(text.as_str()),
            GeneratedValue::Bytes(bytes) => {
                serde_json::Value::from(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

impl From<StringValue> for GeneratedValue {
    fn from(value: StringValue) -> Self {
        match value {
            StringValue::Text(text) => GeneratedValue::Text(text),
            StringValue::Bytes(bytes) => GeneratedValue::Bytes(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_counts_chars() {
        let value = StringValue::from("héllo".to_string());
        assert_eq!(value.len(), 5);
        assert_eq!(value.as_bytes().len(), 6);
        assert_eq!(value.kind(), ReturnKind::Text);
    }

    #[test]
    fn test_bytes_length_counts_bytes() {
        let value = StringValue::from(vec![0xff, 0x00, 0x41]);
        assert_eq!(value.len(), 3);
        assert_eq!(value.kind(), ReturnKind::Bytes);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(GeneratedValue::Integer(5).to_json(), serde_json::json!(5));
        assert_eq!(GeneratedValue::Number(2.5).to_json(), serde_json::json!(2.5));
        assert_eq!(
            GeneratedValue::Bytes(b"U3dhZ2dlcg==".to_vec()).to_json(),
            serde_json::json!("U3dhZ2dlcg==")
        );
        assert_eq!(
            GeneratedValue::from(StringValue::Text("a".into())).as_str(),
            Some("a")
        );
    }
}
