use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Indexer state: the latest indexed block and the latest known quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Head {
    pub cycle: i64,
    pub level: i64,
    pub hash: String,
    pub protocol: String,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub voting_epoch: i64,
    pub voting_period: i64,
    pub known_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub last_sync: Option<DateTime<Utc>>,
    pub synced: bool,
    pub quote_level: i64,
    pub quote_btc: f64,
    pub quote_eur: f64,
    pub quote_usd: f64,
    pub quote_cny: f64,
    pub quote_jpy: f64,
    pub quote_krw: f64,
    pub quote_eth: f64,
}

impl Head {
    /// Levels the indexer still has to catch up on.
    pub fn lag(&self) -> i64 {
        self.known_level - self.level
    }
}
