use serde::{Deserialize, Serialize};

/// A single leveled text message.
///
/// Higher `level` values denote more severe messages. Both fields are required
/// when deserializing, so malformed input is rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: i64,
    pub text: String,
}

impl LogRecord {
    pub fn new(level: i64, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_rejected() {
        let ok: LogRecord = serde_json::from_str(r#"{"level":3,"text":"disk full"}"#).unwrap();
        assert_eq!(ok, LogRecord::new(3, "disk full"));

        assert!(serde_json::from_str::<LogRecord>(r#"{"text":"no level"}"#).is_err());
        assert!(serde_json::from_str::<LogRecord>(r#"{"level":1}"#).is_err());
    }
}
