use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};

/// A baking or endorsing right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Right {
    /// `baking` or `endorsing`.
    #[serde(rename = "type")]
    pub right_type: String,
    pub cycle: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Only set for baking rights.
    pub priority: Option<i64>,
    /// Only set for endorsing rights.
    pub slots: Option<i64>,
    pub baker: Alias,
    /// `future`, `realized`, `uncovered` or `missed`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_endorsing_right() {
        let json = r#"{"type": "endorsing", "cycle": 300, "level": 1228801,
            "timestamp": "2020-11-23T10:00:00Z", "slots": 2,
            "baker": {"address": "tz1baker"}, "status": "realized"}"#;
        let right: Right = serde_json::from_str(json).unwrap();
        assert_eq!(right.right_type, "endorsing");
        assert_eq!(right.priority, None);
        assert_eq!(right.slots, Some(2));
    }
}
