use serde::{Deserialize, Serialize};

/// Settings captured when a [`MessageJoiner`](crate::joiner::MessageJoiner) is built.
///
/// Any level and any separator (including the empty string) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinerConfig {
    /// Records with `level >= min_level` pass the filter.
    pub min_level: i64,
    pub separator: String,
}

impl JoinerConfig {
    pub fn new(min_level: i64, separator: impl Into<String>) -> Self {
        Self {
            min_level,
            separator: separator.into(),
        }
    }
}

impl Default for JoinerConfig {
    fn default() -> Self {
        Self::new(0, " ")
    }
}
