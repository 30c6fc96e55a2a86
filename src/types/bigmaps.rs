use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};

/// A big map allocated by a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigMap {
    pub ptr: i64,
    pub contract: Alias,
    /// Path to the big map in the contract storage.
    pub path: String,
    pub tags: Option<Vec<String>>,
    pub active: bool,
    pub first_level: i64,
    pub last_level: i64,
    pub total_keys: u64,
    pub active_keys: u64,
    pub updates: u64,
    pub key_type: Option<serde_json::Value>,
    pub value_type: Option<serde_json::Value>,
}

/// Micheline type expression of a big map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigMapType {
    pub prim: String,
    pub args: Option<Vec<serde_json::Value>>,
    pub annots: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigMapUpdate {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub bigmap: i64,
    pub contract: Alias,
    pub path: String,
    /// `allocate`, `add_key`, `update_key`, `remove_key` or `remove`.
    pub action: String,
    pub content: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigMapKey {
    pub id: i64,
    pub active: bool,
    pub hash: String,
    pub key: serde_json::Value,
    pub value: serde_json::Value,
    pub first_level: i64,
    pub last_level: i64,
    pub updates: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_bigmap() {
        let value = json!({
            "ptr": 511,
            "contract": {"alias": "hic et nunc", "address": "KT1Hkg5qeNhfwpKW4fXvq7HGZB9z2EnmCCA9"},
            "path": "ledger",
            "tags": ["ledger"],
            "active": true,
            "firstLevel": 1365000,
            "lastLevel": 1400000,
            "totalKeys": 10,
            "activeKeys": 9,
            "updates": 20,
            "keyType": {"prim": "pair"},
            "valueType": {"prim": "nat"}
        });
        let bigmap: BigMap = serde_json::from_value(value).unwrap();
        assert_eq!(bigmap.ptr, 511);
        assert_eq!(bigmap.tags.as_deref(), Some(&["ledger".to_string()][..]));
        assert_eq!(bigmap.contract.alias.as_deref(), Some("hic et nunc"));
    }

    #[test]
    fn deserializes_key_with_structured_value() {
        let value = json!({
            "id": 1,
            "active": true,
            "hash": "exprabc",
            "key": {"address": "tz1a", "nat": "5"},
            "value": "100",
            "firstLevel": 1,
            "lastLevel": 2,
            "updates": 3
        });
        let key: BigMapKey = serde_json::from_value(value).unwrap();
        assert_eq!(key.key["nat"], "5");
        assert_eq!(key.value, json!("100"));
    }
}
