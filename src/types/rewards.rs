//! Baker and delegator rewards per cycle.
//!
//! Reward fields are all mutez amounts or block/slot counts. Fields past the ones modelled
//! here are kept in `extra` since the API grows them with each protocol.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Alias, QuoteShort};
use crate::token_helpers::Mutez;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakerReward {
    pub cycle: i64,
    pub staking_balance: Mutez,
    pub delegated_balance: Mutez,
    pub num_delegators: u64,
    pub expected_blocks: f64,
    pub expected_endorsements: f64,
    pub future_blocks: u64,
    pub future_block_rewards: Mutez,
    pub future_block_deposits: Mutez,
    pub own_blocks: u64,
    pub own_block_rewards: Mutez,
    pub extra_blocks: u64,
    pub extra_block_rewards: Mutez,
    pub missed_own_blocks: u64,
    pub missed_own_block_rewards: Mutez,
    pub missed_extra_blocks: u64,
    pub missed_extra_block_rewards: Mutez,
    pub uncovered_own_blocks: u64,
    pub uncovered_own_block_rewards: Mutez,
    pub uncovered_extra_blocks: u64,
    pub uncovered_extra_block_rewards: Mutez,
    pub block_deposits: Mutez,
    pub future_endorsements: u64,
    pub future_endorsement_rewards: Mutez,
    pub future_endorsement_deposits: Mutez,
    pub endorsements: u64,
    pub endorsement_rewards: Mutez,
    pub missed_endorsements: u64,
    pub missed_endorsement_rewards: Mutez,
    pub uncovered_endorsements: u64,
    pub uncovered_endorsement_rewards: Mutez,
    pub endorsement_deposits: Mutez,
    pub own_block_fees: Mutez,
    pub extra_block_fees: Mutez,
    pub missed_own_block_fees: Mutez,
    pub missed_extra_block_fees: Mutez,
    pub uncovered_own_block_fees: Mutez,
    pub uncovered_extra_block_fees: Mutez,
    pub double_baking_rewards: Mutez,
    pub double_baking_lost_deposits: Mutez,
    pub double_baking_lost_rewards: Mutez,
    pub double_baking_lost_fees: Mutez,
    pub double_endorsing_rewards: Mutez,
    pub double_endorsing_lost_deposits: Mutez,
    #[serde(default)]
    pub double_endorsing_lost_rewards: Mutez,
    pub double_endorsing_lost_fees: Mutez,
    pub revelation_rewards: Mutez,
    #[serde(default)]
    pub revelation_lost_rewards: Mutez,
    pub revelation_lost_fees: Mutez,
    pub quote: Option<QuoteShort>,
}

impl BakerReward {
    /// Block and endorsement rewards plus fees actually earned in the cycle.
    ///
    /// Returns `None` if the sum overflows.
    pub fn earned(&self) -> Option<Mutez> {
        [
            self.own_block_rewards,
            self.extra_block_rewards,
            self.endorsement_rewards,
            self.own_block_fees,
            self.extra_block_fees,
            self.double_baking_rewards,
            self.double_endorsing_rewards,
            self.revelation_rewards,
        ]
        .into_iter()
        .try_fold(Mutez::ZERO, Mutez::checked_add)
    }
}

/// A delegator's share of a baker's cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorReward {
    pub cycle: i64,
    pub balance: Mutez,
    pub baker: Alias,
    pub staking_balance: Mutez,
    pub quote: Option<QuoteShort>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A delegator's balance within a reward split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitDelegator {
    pub address: String,
    pub balance: Mutez,
    pub current_balance: Mutez,
    pub emptied: bool,
}

/// Baker rewards for a cycle with the delegators they are shared between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSplit {
    pub cycle: Option<i64>,
    pub staking_balance: Mutez,
    pub delegated_balance: Mutez,
    pub num_delegators: u64,
    #[serde(default)]
    pub delegators: Vec<SplitDelegator>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RewardSplit {
    /// Share of the staking balance owned by `address`, in `[0, 1]`.
    pub fn share_of(&self, address: &str) -> Option<f64> {
        if self.staking_balance == Mutez::ZERO {
            return None;
        }
        self.delegators
            .iter()
            .find(|d| d.address == address)
            .map(|d| d.balance.as_mutez() as f64 / self.staking_balance.as_mutez() as f64)
    }
}

/// One delegator's entry of a reward split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatorSplit {
    pub balance: Mutez,
    pub current_balance: Mutez,
    pub emptied: bool,
}
