//! Operations: actions recorded on the Tezos blockchain.
//!
//! Each kind has its own model and list endpoint under `/v1/operations/{kind}`. Lookups that
//! can return several kinds at once (by hash, by account) yield [`Operation`], tagged by the
//! `type` field of each item.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{Alias, OperationStatus, QuoteShort, timestamp};
use crate::token_helpers::Mutez;

/// Voting period an operation was included in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInfo {
    pub index: i64,
    pub epoch: i64,
    pub kind: String,
    pub first_level: i64,
    pub last_level: i64,
}

/// Protocol proposal referenced by a ballot or proposal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalAlias {
    pub alias: Option<String>,
    pub hash: String,
}

/// Contract created by an origination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginatedContract {
    pub kind: Option<String>,
    pub alias: Option<String>,
    pub address: String,
    pub type_hash: Option<i64>,
    pub code_hash: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub delegate: Alias,
    pub slots: i64,
    pub deposit: Mutez,
    pub rewards: Mutez,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub period: PeriodInfo,
    pub proposal: ProposalAlias,
    pub delegate: Alias,
    pub rolls: i64,
    /// `yay`, `nay` or `pass`.
    pub vote: String,
    pub quote: Option<QuoteShort>,
}

/// A proposal operation, as opposed to the [`Proposal`](super::Proposal) it upvotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOperation {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub period: PeriodInfo,
    pub proposal: ProposalAlias,
    pub delegate: Alias,
    pub rolls: i64,
    /// Set when the delegate had already upvoted this proposal.
    pub duplicated: bool,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub account: Alias,
    pub balance: Mutez,
    pub quote: Option<QuoteShort>,
}

/// Double baking or double endorsing evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleBaking {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub accused_level: i64,
    pub accuser: Alias,
    pub accuser_rewards: Mutez,
    pub offender: Alias,
    pub offender_lost_deposits: Mutez,
    pub offender_lost_rewards: Mutez,
    pub offender_lost_fees: Mutez,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoubleEndorsing {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub accused_level: i64,
    pub accuser: Alias,
    pub accuser_rewards: Mutez,
    pub offender: Alias,
    pub offender_lost_deposits: Mutez,
    pub offender_lost_rewards: Mutez,
    pub offender_lost_fees: Mutez,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceRevelation {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub baker: Alias,
    pub baker_rewards: Mutez,
    pub sender: Alias,
    pub revealed_level: i64,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub counter: i64,
    pub initiator: Option<Alias>,
    pub sender: Alias,
    pub nonce: Option<i64>,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub baker_fee: Mutez,
    #[serde(default)]
    pub amount: Mutez,
    pub prev_delegate: Option<Alias>,
    pub new_delegate: Option<Alias>,
    pub status: OperationStatus,
    pub errors: Option<Vec<serde_json::Value>>,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origination {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub counter: i64,
    pub initiator: Option<Alias>,
    pub sender: Alias,
    pub nonce: Option<i64>,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub storage_limit: i64,
    pub storage_used: i64,
    pub baker_fee: Mutez,
    pub storage_fee: Mutez,
    pub allocation_fee: Mutez,
    pub contract_balance: Mutez,
    pub contract_manager: Option<Alias>,
    pub contract_delegate: Option<Alias>,
    pub code: Option<serde_json::Value>,
    pub storage: Option<serde_json::Value>,
    pub diffs: Option<Vec<serde_json::Value>>,
    pub status: OperationStatus,
    pub errors: Option<Vec<serde_json::Value>>,
    pub originated_contract: Option<OriginatedContract>,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub counter: Option<i64>,
    pub initiator: Option<Alias>,
    pub sender: Alias,
    pub nonce: Option<i64>,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub storage_limit: i64,
    pub storage_used: i64,
    pub baker_fee: Mutez,
    pub storage_fee: Mutez,
    pub allocation_fee: Mutez,
    pub target: Option<Alias>,
    pub amount: Mutez,
    pub parameter: Option<serde_json::Value>,
    pub storage: Option<serde_json::Value>,
    pub diffs: Option<Vec<serde_json::Value>>,
    pub status: OperationStatus,
    pub errors: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub has_internals: bool,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reveal {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub hash: String,
    pub sender: Alias,
    pub counter: i64,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub baker_fee: Mutez,
    pub status: OperationStatus,
    pub errors: Option<Vec<serde_json::Value>>,
    pub quote: Option<QuoteShort>,
}

/// Balance change applied by a protocol migration. Has no operation hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub kind: String,
    pub account: Alias,
    pub balance_change: Mutez,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevelationPenalty {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub baker: Alias,
    pub missed_level: i64,
    pub lost_reward: Mutez,
    pub lost_fees: Mutez,
    pub quote: Option<QuoteShort>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baking {
    pub id: i64,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub block: String,
    pub baker: Alias,
    pub priority: Option<i64>,
    pub deposit: Mutez,
    pub reward: Mutez,
    pub fees: Mutez,
    pub quote: Option<QuoteShort>,
}

/// Any operation, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    Endorsement(Endorsement),
    Ballot(Ballot),
    Proposal(ProposalOperation),
    Activation(Activation),
    DoubleBaking(DoubleBaking),
    DoubleEndorsing(DoubleEndorsing),
    NonceRevelation(NonceRevelation),
    Delegation(Delegation),
    Origination(Origination),
    Transaction(Transaction),
    Reveal(Reveal),
    Migration(Migration),
    RevelationPenalty(RevelationPenalty),
    Baking(Baking),
    /// An operation kind this crate has no model for.
    #[serde(other)]
    Other,
}

impl Operation {
    pub fn id(&self) -> Option<i64> {
        Some(match self {
            Self::Endorsement(op) => op.id,
            Self::Ballot(op) => op.id,
            Self::Proposal(op) => op.id,
            Self::Activation(op) => op.id,
            Self::DoubleBaking(op) => op.id,
            Self::DoubleEndorsing(op) => op.id,
            Self::NonceRevelation(op) => op.id,
            Self::Delegation(op) => op.id,
            Self::Origination(op) => op.id,
            Self::Transaction(op) => op.id,
            Self::Reveal(op) => op.id,
            Self::Migration(op) => op.id,
            Self::RevelationPenalty(op) => op.id,
            Self::Baking(op) => op.id,
            Self::Other => return None,
        })
    }

    pub fn level(&self) -> Option<i64> {
        Some(match self {
            Self::Endorsement(op) => op.level,
            Self::Ballot(op) => op.level,
            Self::Proposal(op) => op.level,
            Self::Activation(op) => op.level,
            Self::DoubleBaking(op) => op.level,
            Self::DoubleEndorsing(op) => op.level,
            Self::NonceRevelation(op) => op.level,
            Self::Delegation(op) => op.level,
            Self::Origination(op) => op.level,
            Self::Transaction(op) => op.level,
            Self::Reveal(op) => op.level,
            Self::Migration(op) => op.level,
            Self::RevelationPenalty(op) => op.level,
            Self::Baking(op) => op.level,
            Self::Other => return None,
        })
    }
}

/// An operation kind with its own `/v1/operations/{PATH}` endpoints.
pub trait OperationKind: DeserializeOwned {
    /// Path segment under `/v1/operations/`, also the value of the `type` filter.
    const PATH: &'static str;
    /// Base fields accepted by the list endpoint.
    const FILTERS: &'static [&'static str];
}

/// Base fields accepted by every `/v1/operations/{kind}/count` endpoint.
pub const OPERATION_COUNT_FILTERS: &[&str] = &["level", "timestamp"];

macro_rules! operation_kind {
    ($ty:ty, $path:literal, [$($field:literal),* $(,)?]) => {
        impl OperationKind for $ty {
            const PATH: &'static str = $path;
            const FILTERS: &'static [&'static str] =
                &[$($field,)* "sort", "offset", "limit"];
        }
    };
}

operation_kind!(Endorsement, "endorsements", ["delegate", "level", "timestamp"]);
operation_kind!(Ballot, "ballots", ["delegate", "level", "epoch", "period", "timestamp"]);
operation_kind!(
    ProposalOperation,
    "proposals",
    ["delegate", "level", "epoch", "period", "proposal", "duplicated", "timestamp"]
);
operation_kind!(Activation, "activations", ["account", "level", "timestamp"]);
operation_kind!(
    DoubleBaking,
    "double_baking",
    ["anyof", "accuser", "offender", "level", "timestamp"]
);
operation_kind!(
    DoubleEndorsing,
    "double_endorsing",
    ["anyof", "accuser", "offender", "level", "timestamp"]
);
operation_kind!(
    NonceRevelation,
    "nonce_revelations",
    ["anyof", "baker", "sender", "level", "timestamp"]
);
operation_kind!(
    Delegation,
    "delegations",
    ["anyof", "initiator", "sender", "prevDelegate", "newDelegate", "level", "status", "timestamp"]
);
operation_kind!(
    Origination,
    "originations",
    [
        "anyof",
        "initiator",
        "sender",
        "contractManager",
        "contractDelegate",
        "originatedContract",
        "typeHash",
        "codeHash",
        "level",
        "status",
        "timestamp",
    ]
);
operation_kind!(
    Transaction,
    "transactions",
    [
        "anyof",
        "initiator",
        "sender",
        "target",
        "amount",
        "level",
        "entrypoint",
        "parameter",
        "hasInternals",
        "status",
        "timestamp",
    ]
);
operation_kind!(Reveal, "reveals", ["sender", "level", "status", "timestamp"]);
operation_kind!(
    Migration,
    "migrations",
    ["account", "kind", "balanceChange", "level", "timestamp"]
);
operation_kind!(RevelationPenalty, "revelation_penalties", ["baker", "level", "timestamp"]);
operation_kind!(Baking, "baking", ["baker", "level", "timestamp"]);

/// Base fields accepted by `/v1/accounts/{address}/operations`.
///
/// The endpoint merges the filters of every kind, so one filter can affect several kinds.
pub const ACCOUNT_OPERATION_FILTERS: &[&str] = &[
    "type",
    "initiator",
    "sender",
    "target",
    "prevDelegate",
    "newDelegate",
    "contractManager",
    "contractDelegate",
    "originatedContract",
    "accuser",
    "offender",
    "baker",
    "level",
    "timestamp",
    "entrypoint",
    "parameter",
    "hasInternals",
    "status",
    "lastId",
    "sort",
    "limit",
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transaction_json() -> serde_json::Value {
        json!({
            "type": "transaction",
            "id": 42,
            "level": 1500000,
            "timestamp": "2021-06-01T12:00:00Z",
            "block": "BLblock",
            "hash": "oohash",
            "counter": 7,
            "sender": {"address": "tz1sender"},
            "gasLimit": 1500,
            "gasUsed": 1427,
            "storageLimit": 0,
            "storageUsed": 0,
            "bakerFee": 1000,
            "storageFee": 0,
            "allocationFee": 0,
            "target": {"alias": "Target", "address": "KT1target"},
            "amount": 2500000,
            "parameter": {"entrypoint": "transfer", "value": {}},
            "status": "applied",
            "hasInternals": false
        })
    }

    #[test]
    fn tagged_operation_dispatches_on_type() {
        let op: Operation = serde_json::from_value(transaction_json()).unwrap();
        match &op {
            Operation::Transaction(tx) => {
                assert_eq!(tx.amount, Mutez(2_500_000));
                assert_eq!(tx.status, OperationStatus::Applied);
                assert_eq!(tx.target.as_ref().unwrap().address, "KT1target");
            }
            other => panic!("expected a transaction, got {other:?}"),
        }
        assert_eq!(op.id(), Some(42));
        assert_eq!(op.level(), Some(1_500_000));
    }

    #[test]
    fn kind_models_ignore_the_type_field() {
        let tx: Transaction = serde_json::from_value(transaction_json()).unwrap();
        assert_eq!(tx.hash, "oohash");
    }

    #[test]
    fn unknown_kind_is_kept_as_other() {
        let op: Operation =
            serde_json::from_value(json!({"type": "set_deposits_limit", "id": 1})).unwrap();
        assert_eq!(op, Operation::Other);
        assert_eq!(op.id(), None);
    }

    #[test]
    fn snake_case_tags() {
        let value = json!({
            "type": "revelation_penalty",
            "id": 3,
            "level": 10,
            "timestamp": null,
            "block": "BL",
            "baker": {"address": "tz1baker"},
            "missedLevel": 9,
            "lostReward": 100,
            "lostFees": 1
        });
        let op: Operation = serde_json::from_value(value).unwrap();
        assert!(matches!(op, Operation::RevelationPenalty(ref p) if p.missed_level == 9));
    }

    #[test]
    fn list_filters_include_pagination() {
        assert_eq!(<Transaction as OperationKind>::PATH, "transactions");
        assert!(Transaction::FILTERS.contains(&"target"));
        assert!(Transaction::FILTERS.ends_with(&["sort", "offset", "limit"]));
        assert!(!Baking::FILTERS.contains(&"sender"));
    }
}
