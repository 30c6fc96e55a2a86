use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};
use crate::token_helpers::Mutez;

/// An originated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(rename = "type")]
    pub account_type: String,
    /// `delegator_contract` or `smart_contract`.
    pub kind: Option<String>,
    pub alias: Option<String>,
    pub address: String,
    #[serde(default)]
    pub balance: Mutez,
    pub creator: Option<Alias>,
    pub manager: Option<Alias>,
    pub delegate: Option<Alias>,
    pub delegation_level: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub delegation_time: Option<DateTime<Utc>>,
    pub first_activity: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub first_activity_time: Option<DateTime<Utc>>,
    pub last_activity: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub last_activity_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_contracts: u64,
    #[serde(default)]
    pub num_delegations: u64,
    #[serde(default)]
    pub num_originations: u64,
    #[serde(default)]
    pub num_transactions: u64,
    #[serde(default)]
    pub num_reveals: u64,
    #[serde(default)]
    pub num_migrations: u64,
    pub type_hash: Option<i64>,
    pub code_hash: Option<i64>,
    pub metadata: Option<serde_json::Value>,
    /// Present when listed with `include_storage`.
    pub storage: Option<serde_json::Value>,
}

/// A contract entrypoint and its parameter schema in the requested representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entrypoint {
    pub name: String,
    pub json_parameters: Option<serde_json::Value>,
    pub micheline_parameters: Option<serde_json::Value>,
    pub michelson_parameters: Option<String>,
    #[serde(default)]
    pub unused: bool,
}

/// Which parameter schemas [`Entrypoint`] lookups include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrypointOptions {
    pub json: bool,
    pub micheline: bool,
    pub michelson: bool,
}

impl Default for EntrypointOptions {
    fn default() -> Self {
        Self {
            json: true,
            micheline: false,
            michelson: false,
        }
    }
}

/// Representation of `/v1/contracts/{address}/code`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContractCodeFormat {
    #[default]
    Micheline,
    Michelson,
    Bytes,
}

impl ContractCodeFormat {
    pub fn as_param(&self) -> u8 {
        match self {
            Self::Micheline => 0,
            Self::Michelson => 1,
            Self::Bytes => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_smart_contract() {
        let json = r#"{
            "type": "contract",
            "kind": "smart_contract",
            "address": "KT1Hkg5qeNhfwpKW4fXvq7HGZB9z2EnmCCA9",
            "balance": 5,
            "creator": {"address": "tz1creator"},
            "firstActivityTime": "2021-03-01T00:00:00Z",
            "numTransactions": 12,
            "typeHash": -1,
            "codeHash": 42
        }"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.kind.as_deref(), Some("smart_contract"));
        assert_eq!(contract.creator.unwrap().address, "tz1creator");
        assert_eq!(contract.num_transactions, 12);
        assert_eq!(contract.code_hash, Some(42));
        assert!(contract.storage.is_none());
    }

    #[test]
    fn entrypoint_defaults_to_json_schema_only() {
        let options = EntrypointOptions::default();
        assert!(options.json && !options.micheline && !options.michelson);
        assert_eq!(ContractCodeFormat::Bytes.as_param(), 2);
    }
}
