use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};

/// Token contract listed on the explorer home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub address: String,
    pub alias: Option<String>,
    pub balance: i64,
    pub num_transactions: u64,
    #[serde(default, with = "timestamp::option")]
    pub first_activity_time: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub last_activity_time: Option<DateTime<Utc>>,
    pub creator: Option<Alias>,
    pub tzips: Option<Vec<String>>,
}
