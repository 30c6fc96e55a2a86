use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Activation, Alias, Ballot, Delegation, DoubleBaking, DoubleEndorsing, Endorsement,
    NonceRevelation, Origination, ProposalOperation, QuoteShort, Reveal, SoftwareShort,
    Transaction, timestamp,
};
use crate::token_helpers::Mutez;

/// A baked block. Operation lists are only present when requested with `operations=true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub level: i64,
    pub hash: String,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub proto: i64,
    pub priority: Option<i64>,
    pub validations: i64,
    pub deposit: Mutez,
    pub reward: Mutez,
    pub fees: Mutez,
    pub nonce_revealed: bool,
    pub baker: Option<Alias>,
    pub software: Option<SoftwareShort>,
    pub endorsements: Option<Vec<Endorsement>>,
    pub proposals: Option<Vec<ProposalOperation>>,
    pub ballots: Option<Vec<Ballot>>,
    pub activations: Option<Vec<Activation>>,
    pub double_baking: Option<Vec<DoubleBaking>>,
    pub double_endorsing: Option<Vec<DoubleEndorsing>>,
    pub nonce_revelations: Option<Vec<NonceRevelation>>,
    pub delegations: Option<Vec<Delegation>>,
    pub originations: Option<Vec<Origination>>,
    pub transactions: Option<Vec<Transaction>>,
    pub reveals: Option<Vec<Reveal>>,
    pub quote: Option<QuoteShort>,
}
