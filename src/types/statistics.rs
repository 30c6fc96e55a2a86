use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuoteShort, timestamp};
use crate::token_helpers::Mutez;

/// Supply statistics at a block, day or cycle end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Set for cyclic statistics only.
    pub cycle: Option<i64>,
    /// Set for daily statistics only.
    #[serde(default, with = "timestamp::option")]
    pub date: Option<DateTime<Utc>>,
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub total_supply: Mutez,
    pub circulating_supply: Mutez,
    pub total_bootstrapped: Mutez,
    pub total_commitments: Mutez,
    pub total_activated: Mutez,
    pub total_created: Mutez,
    pub total_burned: Mutez,
    pub total_vested: Mutez,
    pub total_frozen: Mutez,
    pub quote: Option<QuoteShort>,
}
