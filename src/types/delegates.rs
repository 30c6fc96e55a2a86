use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccountMetadata, SoftwareShort, timestamp};
use crate::token_helpers::Mutez;

/// A registered baker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegate {
    #[serde(rename = "type")]
    pub account_type: String,
    pub alias: Option<String>,
    pub active: bool,
    pub address: String,
    pub public_key: Option<String>,
    pub revealed: Option<bool>,
    pub balance: Mutez,
    #[serde(default)]
    pub frozen_deposits: Mutez,
    #[serde(default)]
    pub frozen_rewards: Mutez,
    #[serde(default)]
    pub frozen_fees: Mutez,
    pub counter: Option<i64>,
    pub activation_level: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub activation_time: Option<DateTime<Utc>>,
    pub deactivation_level: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub deactivation_time: Option<DateTime<Utc>>,
    pub staking_balance: Mutez,
    #[serde(default)]
    pub num_contracts: u64,
    #[serde(default)]
    pub num_delegators: u64,
    #[serde(default)]
    pub num_blocks: u64,
    #[serde(default)]
    pub num_endorsements: u64,
    #[serde(default)]
    pub num_ballots: u64,
    #[serde(default)]
    pub num_proposals: u64,
    #[serde(default)]
    pub num_activations: u64,
    #[serde(default)]
    pub num_double_baking: u64,
    #[serde(default)]
    pub num_double_endorsing: u64,
    #[serde(default)]
    pub num_nonce_revelations: u64,
    #[serde(default)]
    pub num_revelation_penalties: u64,
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
    pub metadata: Option<AccountMetadata>,
    pub software: Option<SoftwareShort>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_delegate_with_software() {
        let value = json!({
            "type": "delegate",
            "alias": "Baking Benjamins",
            "active": true,
            "address": "tz1S5WxdZR5f9NzsPXhr7L9L1vrEb5spZFur",
            "balance": 1000,
            "stakingBalance": 5000,
            "numDelegators": 3,
            "numRevelationPenalties": 1,
            "software": {"version": "v9.1", "date": "2021-04-01T00:00:00Z"}
        });
        let delegate: Delegate = serde_json::from_value(value).unwrap();
        assert!(delegate.active);
        assert_eq!(delegate.staking_balance, Mutez(5000));
        assert_eq!(delegate.num_revelation_penalties, 1);
        assert_eq!(delegate.software.unwrap().version.as_deref(), Some("v9.1"));
    }
}
