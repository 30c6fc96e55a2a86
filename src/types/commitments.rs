use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};
use crate::token_helpers::Mutez;

/// Fundraiser commitment, keyed by its blinded address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub address: String,
    pub balance: Mutez,
    pub activated: bool,
    pub activation_level: Option<i64>,
    #[serde(default, with = "timestamp::option")]
    pub activation_time: Option<DateTime<Utc>>,
    pub activated_account: Option<Alias>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_commitment() {
        let json = r#"{"address": "btz1abc", "balance": 100, "activated": false}"#;
        let commitment: Commitment = serde_json::from_str(json).unwrap();
        assert!(!commitment.activated);
        assert!(commitment.activation_time.is_none());
        assert!(commitment.activated_account.is_none());
    }
}
