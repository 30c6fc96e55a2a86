use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A baker software build, identified by the short hash of its commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Software {
    pub short_hash: String,
    pub first_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub first_time: Option<DateTime<Utc>>,
    pub last_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub last_time: Option<DateTime<Utc>>,
    pub blocks_count: u64,
    pub metadata: Option<serde_json::Value>,
}

impl Software {
    /// Version string from the build metadata, if it was published.
    pub fn version(&self) -> Option<&str> {
        self.metadata.as_ref()?.get("version")?.as_str()
    }
}

/// Software summary attached to blocks and delegates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareShort {
    pub version: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_from_metadata() {
        let value = json!({
            "shortHash": "a3b5c6d7",
            "firstLevel": 1,
            "firstTime": "2021-01-01T00:00:00Z",
            "lastLevel": 10,
            "lastTime": null,
            "blocksCount": 10,
            "metadata": {"version": "v8.2", "commitDate": "2021-01-01"}
        });
        let software: Software = serde_json::from_value(value).unwrap();
        assert_eq!(software.version(), Some("v8.2"));
        assert!(software.last_time.is_none());
    }

    #[test]
    fn version_absent_without_metadata() {
        let value = json!({
            "shortHash": "a3b5c6d7",
            "firstLevel": 1,
            "lastLevel": 10,
            "blocksCount": 10,
            "metadata": null
        });
        let software: Software = serde_json::from_value(value).unwrap();
        assert_eq!(software.version(), None);
    }
}
