use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};
use crate::token_helpers::Mutez;

/// Kind of account as reported by `/v1/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    User,
    Delegate,
    Contract,
    /// Account that no longer exists on chain.
    Empty,
    #[serde(other)]
    Unknown,
}

/// An implicit account, delegate or contract.
///
/// `empty` accounts only carry their address and counter, so activity counters default
/// to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub alias: Option<String>,
    pub address: String,
    pub public_key: Option<String>,
    pub revealed: Option<bool>,
    #[serde(default)]
    pub balance: Mutez,
    pub counter: Option<i64>,
    pub delegate: Option<Alias>,
    pub delegation_level: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub delegation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_contracts: u64,
    #[serde(default)]
    pub num_activations: u64,
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
    pub first_activity: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub first_activity_time: Option<DateTime<Utc>>,
    pub last_activity: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub last_activity_time: Option<DateTime<Utc>>,
    pub contracts: Option<Vec<serde_json::Value>>,
    pub operations: Option<Vec<serde_json::Value>>,
    pub metadata: Option<AccountMetadata>,
}

/// Off-chain profile information published for an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub kind: Option<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub site: Option<String>,
    pub support: Option<String>,
    pub email: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub discord: Option<String>,
    pub reddit: Option<String>,
    pub slack: Option<String>,
    pub github: Option<String>,
    pub gitlab: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub medium: Option<String>,
}
