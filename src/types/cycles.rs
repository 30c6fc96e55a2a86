use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuoteShort, timestamp};
use crate::token_helpers::Mutez;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub index: i64,
    pub first_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub start_time: Option<DateTime<Utc>>,
    pub last_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub snapshot_index: i64,
    pub snapshot_level: i64,
    pub random_seed: Option<String>,
    pub total_bakers: i64,
    pub total_rolls: Option<i64>,
    pub total_staking: Mutez,
    pub total_delegators: i64,
    pub total_delegated: Mutez,
    pub quote: Option<QuoteShort>,
}
